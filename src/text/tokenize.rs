use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w']+\b").expect("word token pattern is valid"));

static TOKENISH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("token count pattern is valid"));

/// Lowercased word tokens. There is no stoplist; every token contributes,
/// including function words.
pub fn word_tokens(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Fast token-ish count: maximal word runs plus individual punctuation.
///
/// Never returns 0, so budgets can never divide by zero or treat content as
/// free.
pub fn rough_token_count(text: &str) -> usize {
    TOKENISH_RE.find_iter(text).count().max(1)
}
