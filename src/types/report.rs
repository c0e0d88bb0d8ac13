use serde::{Deserialize, Serialize};

use crate::compression::CompressionMode;

/// Identifies the selection pipeline in metadata.
pub const STRATEGY: &str = "bm25+mmr+knapsack";

/// Metadata describing one trimming pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimMetadata {
    pub strategy: String,
    /// The implicit query the input was scored against.
    pub query: String,
    pub pool_size: usize,
    /// Sentences kept by the budget selector (before keyword repair).
    pub kept: usize,
    pub tokens_before: usize,
    pub tokens_after: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub compression: Option<CompressionMode>,
}

/// The trimmed text together with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimOutcome {
    pub text: String,
    pub meta: TrimMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum TrimError {
    #[error("mmr lambda must lie within [0, 1], got {0}")]
    InvalidLambda(f64),
}
