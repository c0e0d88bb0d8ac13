use std::collections::{BTreeMap, BTreeSet};

use crate::text::word_tokens;

/// Sparse TF-IDF weighted term vector.
///
/// An ordered map keeps dot products and norms byte-deterministic across
/// runs, which a hash map's randomized iteration order would not.
pub type TermVector = BTreeMap<String, f64>;

/// Build one TF-IDF vector per sentence, with document frequency scoped to
/// exactly the sentence set passed in.
pub fn tfidf_vectors(sentences: &[String]) -> Vec<TermVector> {
    let docs: Vec<Vec<String>> = sentences.iter().map(|s| word_tokens(s)).collect();
    let n = docs.len().max(1) as f64;

    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &docs {
        let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    docs.iter()
        .map(|doc| {
            let len = doc.len().max(1) as f64;
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for term in doc {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
                .into_iter()
                .map(|(term, count)| {
                    let d = df.get(term).copied().unwrap_or(0) as f64;
                    let idf = ((n + 1.0) / (d + 1.0)).ln() + 1.0;
                    (term.to_string(), (count as f64 / len) * idf)
                })
                .collect()
        })
        .collect()
}

/// Cosine similarity of two sparse vectors; 0.0 if either is the zero vector.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &wa)| b.get(term).map(|&wb| wa * wb))
        .sum();
    let norm_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}
