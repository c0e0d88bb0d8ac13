use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::text::{rough_token_count, split_sentences, word_tokens};

/// Top-k terms of the text by TF×IDF importance, IDF taken over the text's
/// own sentence-level document frequency.
///
/// Ranking is a stable sort over tokens in first-encounter order, so score
/// ties resolve to the first-encountered term. Deterministic given the same
/// text and k; returns at most k terms.
pub fn top_keywords(text: &str, k: usize) -> Vec<String> {
    let sentences = split_sentences(text);
    let docs: Vec<Vec<String>> = if sentences.is_empty() {
        vec![word_tokens(text)]
    } else {
        sentences.iter().map(|s| word_tokens(s)).collect()
    };

    let n = docs.len().max(1) as f64;
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &docs {
        let unique: BTreeSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    // whole-text term frequency, first-encounter order preserved for tie-breaks
    let mut order: Vec<String> = Vec::new();
    let mut tf: HashMap<String, usize> = HashMap::new();
    for token in word_tokens(text) {
        if let Some(count) = tf.get_mut(&token) {
            *count += 1;
        } else {
            tf.insert(token.clone(), 1);
            order.push(token);
        }
    }

    let mut ranked: Vec<(String, f64)> = order
        .into_iter()
        .map(|term| {
            let d = df.get(term.as_str()).copied().unwrap_or(0) as f64;
            let idf = ((n + 1.0) / (1.0 + d)).ln() + 1.0;
            let score = tf[&term] as f64 * idf;
            (term, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(k).map(|(term, _)| term).collect()
}

/// Best-effort keyword repair on the trimmed output.
///
/// For the top keywords of the original text missing from `trimmed`, scan the
/// original sentence sequence in order for one sentence containing all of
/// them; the first such sentence whose appended result still fits the budget
/// is appended, once. If no sentence covers every missing keyword within
/// budget the output is returned unchanged. This is a repair, not a
/// guarantee.
pub fn ensure_keywords(
    original: &str,
    trimmed: &str,
    sentences: &[String],
    budget: usize,
    top_k: usize,
) -> String {
    let keywords = top_keywords(original, top_k);
    let present: HashSet<String> = word_tokens(trimmed).into_iter().collect();
    let missing: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|term| !present.contains(*term))
        .collect();
    if missing.is_empty() {
        return trimmed.to_string();
    }

    for sentence in sentences {
        let tokens: HashSet<String> = word_tokens(sentence).into_iter().collect();
        if missing.iter().all(|term| tokens.contains(*term)) {
            let candidate = format!("{trimmed} {sentence}").trim().to_string();
            if rough_token_count(&candidate) <= budget {
                return candidate;
            }
        }
    }
    trimmed.to_string()
}
