use std::cmp::Ordering;

use crate::scoring::{cosine, tfidf_vectors};

/// Greedily build a pool of the `k` most relevant-yet-mutually-dissimilar
/// sentences (Maximal Marginal Relevance over TF-IDF cosine).
///
/// Candidates are scanned in relevance order (stable sort, so score ties keep
/// ascending index) and each pick maximizes
/// `lambda * relevance(i) - (1 - lambda) * max_{j in chosen} cosine(i, j)`,
/// earliest candidate winning ties. `lambda` near 1 favors relevance, near 0
/// favors novelty.
///
/// Returns up to `k` indices into `sentences`, in selection order. The
/// deliberate O(k·n) rescan keeps this simple; pools are tens of sentences.
pub fn mmr_select(sentences: &[String], relevance: &[f64], k: usize, lambda: f64) -> Vec<usize> {
    debug_assert_eq!(sentences.len(), relevance.len());

    let vectors = tfidf_vectors(sentences);
    let mut pool: Vec<usize> = (0..sentences.len()).collect();
    pool.sort_by(|&a, &b| {
        relevance[b]
            .partial_cmp(&relevance[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut chosen: Vec<usize> = Vec::new();
    while !pool.is_empty() && chosen.len() < k {
        if chosen.is_empty() {
            chosen.push(pool.remove(0));
            continue;
        }
        let mut best_pos = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (pos, &candidate) in pool.iter().enumerate() {
            let redundancy = chosen
                .iter()
                .map(|&picked| cosine(&vectors[candidate], &vectors[picked]))
                .fold(0.0_f64, f64::max);
            let marginal = lambda * relevance[candidate] - (1.0 - lambda) * redundancy;
            if marginal > best_score {
                best_score = marginal;
                best_pos = pos;
            }
        }
        chosen.push(pool.remove(best_pos));
    }
    chosen
}
