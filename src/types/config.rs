use serde::{Deserialize, Serialize};

use crate::scoring::Bm25Params;
use crate::types::report::TrimError;

/// Pipeline configuration.
///
/// `token_budget` and `pool_size` are clamped to ≥ 1 at use (pool size also
/// to the sentence count), so out-of-range values there are corrected rather
/// than rejected. `mmr_lambda` has no meaningful clamp and is validated
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimConfig {
    /// Hard token cap on the output, enforced by the budget selector. The
    /// only overrun is the documented forced fallback when nothing fits.
    pub token_budget: usize,
    /// Size of the diversity pool handed to the budget selector.
    pub pool_size: usize,
    /// Relevance/novelty trade-off in [0, 1]; near 1 favors relevance, near 0
    /// favors novelty.
    pub mmr_lambda: f64,
    /// Number of must-preserve keywords the repair pass attempts.
    pub keyword_top_k: usize,
    pub bm25: Bm25Params,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            token_budget: 400,
            pool_size: 10,
            mmr_lambda: 0.6,
            keyword_top_k: 8,
            bm25: Bm25Params::default(),
        }
    }
}

impl TrimConfig {
    pub fn validate(&self) -> Result<(), TrimError> {
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.mmr_lambda) {
            return Err(TrimError::InvalidLambda(self.mmr_lambda));
        }
        Ok(())
    }
}
