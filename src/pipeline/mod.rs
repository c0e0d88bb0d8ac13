use crate::compression::{CompressionMode, Compressor};
use crate::keywords::ensure_keywords;
use crate::scoring::bm25_scores;
use crate::selection::{mmr_select, select_within_budget};
use crate::text::{extract_query, rough_token_count, split_sentences};
use crate::types::{TrimConfig, TrimError, TrimMetadata, TrimOutcome, STRATEGY};

/// Runs the full trimming pipeline over a single text.
///
/// Holds only its configuration; every call recomputes corpus statistics from
/// scratch, so concurrent use from independent callers needs no coordination.
#[derive(Debug, Clone, Default)]
pub struct Trimmer {
    config: TrimConfig,
}

impl Trimmer {
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Trim `text` to the configured token budget.
    ///
    /// Stages run strictly forward: sentence split, query extraction, BM25
    /// relevance over all sentences, MMR diversity pool, knapsack selection
    /// within budget, keyword repair against the original text. Degenerate
    /// (empty/whitespace) input is not an error and returns the stripped
    /// input with `kept = 0`. Output is never empty for non-empty input: when
    /// nothing in the pool fits the budget, the single highest-ranked pool
    /// sentence is forced in, the one documented case where the budget may
    /// be exceeded.
    pub fn trim(&self, text: &str) -> Result<TrimOutcome, TrimError> {
        self.config.validate()?;

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            let stripped = text.trim().to_string();
            let tokens = rough_token_count(&stripped);
            return Ok(TrimOutcome {
                text: stripped,
                meta: TrimMetadata {
                    strategy: STRATEGY.to_string(),
                    query: String::new(),
                    pool_size: 0,
                    kept: 0,
                    tokens_before: tokens,
                    tokens_after: tokens,
                    compression: None,
                },
            });
        }

        let query = extract_query(text);
        let relevance = bm25_scores(&sentences, &query, self.config.bm25);

        let budget = self.config.token_budget.max(1);
        let pool_k = self.config.pool_size.max(1).min(sentences.len());
        let pool_idx = mmr_select(&sentences, &relevance, pool_k, self.config.mmr_lambda);
        debug_assert!(pool_idx.iter().all(|&i| i < sentences.len()));

        let pool_sentences: Vec<String> = pool_idx.iter().map(|&i| sentences[i].clone()).collect();
        let pool_values: Vec<f64> = pool_idx.iter().map(|&i| relevance[i]).collect();

        let chosen = select_within_budget(&pool_sentences, &pool_values, budget);
        // nothing fits: force the highest-ranked pool sentence so output is
        // never empty
        let kept: Vec<&str> = if chosen.is_empty() {
            vec![pool_sentences[0].as_str()]
        } else {
            chosen.iter().map(|&i| pool_sentences[i].as_str()).collect()
        };
        let kept_count = kept.len();
        let joined = kept.join(" ");

        let repaired = ensure_keywords(text, &joined, &sentences, budget, self.config.keyword_top_k);
        let tokens_after = rough_token_count(&repaired);

        Ok(TrimOutcome {
            text: repaired,
            meta: TrimMetadata {
                strategy: STRATEGY.to_string(),
                query,
                pool_size: pool_sentences.len(),
                kept: kept_count,
                tokens_before: rough_token_count(text),
                tokens_after,
                compression: None,
            },
        })
    }

    /// Trim, then rewrite the selected text through a compressor.
    ///
    /// The compressor is a post-processing step only; correctness never
    /// depends on it (see [`crate::compression::PassthroughCompressor`]).
    pub fn trim_compressed<C: Compressor>(
        &self,
        text: &str,
        compressor: &C,
        mode: CompressionMode,
    ) -> Result<TrimOutcome, TrimError> {
        let mut outcome = self.trim(text)?;
        outcome.text = compressor.compress(&outcome.text, mode);
        outcome.meta.tokens_after = rough_token_count(&outcome.text);
        outcome.meta.compression = Some(mode);
        Ok(outcome)
    }
}

/// Trim with the default configuration (budget 400, pool 10, lambda 0.6,
/// top 8 keywords).
pub fn trim(text: &str) -> Result<TrimOutcome, TrimError> {
    Trimmer::default().trim(text)
}
