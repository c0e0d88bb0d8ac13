use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::text::word_tokens;

/// BM25 free parameters. `k1` controls term-frequency saturation, `b`
/// controls length normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Score every sentence against the query with BM25.
///
/// Document frequency and average length are computed fresh over exactly the
/// sentence set passed in; nothing is cached across calls. Sentences sharing
/// no query terms score 0.0. Scores are meaningful only relative to other
/// scores from the same pass. Never panics on an empty query or empty
/// sentences.
pub fn bm25_scores(sentences: &[String], query: &str, params: Bm25Params) -> Vec<f64> {
    let docs: Vec<Vec<String>> = sentences.iter().map(|s| word_tokens(s)).collect();
    let query_terms = unique_in_order(&word_tokens(query));

    let n = docs.len().max(1) as f64;
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &docs {
        let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    let avgdl = docs.iter().map(Vec::len).sum::<usize>() as f64 / n;
    let avgdl = if avgdl > 0.0 { avgdl } else { 1.0 };

    docs.iter()
        .map(|doc| {
            let dl = doc.len() as f64;
            let mut tf: BTreeMap<&str, usize> = BTreeMap::new();
            for term in doc {
                *tf.entry(term).or_insert(0) += 1;
            }
            let mut score = 0.0;
            for term in &query_terms {
                let Some(&n_t) = df.get(term.as_str()) else {
                    continue;
                };
                let n_t = n_t as f64;
                let idf = (1.0 + (n - n_t + 0.5) / (n_t + 0.5)).ln();
                let freq = tf.get(term.as_str()).copied().unwrap_or(0) as f64;
                let denom = freq + params.k1 * (1.0 - params.b + params.b * dl / avgdl);
                let denom = if denom != 0.0 { denom } else { 1.0 };
                score += idf * (freq * (params.k1 + 1.0) / denom);
            }
            score
        })
        .collect()
}

/// Unique tokens in first-occurrence order, so score accumulation is
/// byte-deterministic across runs.
fn unique_in_order(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for token in tokens {
        if seen.insert(token.clone()) {
            out.push(token.clone());
        }
    }
    out
}
