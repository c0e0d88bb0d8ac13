/// Characters that may open a new sentence after terminal punctuation.
fn opens_sentence(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | ')' | ']')
}

/// Split text into sentences.
///
/// Internal whitespace is normalized to single spaces first; a boundary is a
/// `.`, `!` or `?` followed by whitespace and then an uppercase letter, a
/// digit, or a quote/bracket. This is a heuristic, not a grammar: it
/// tolerates abbreviations imperfectly rather than failing. Empty input
/// yields an empty sequence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = normalized.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        if matches!(chars[i], '.' | '!' | '?')
            && chars.get(i + 1) == Some(&' ')
            && chars.get(i + 2).is_some_and(|&c| opens_sentence(c))
        {
            let sentence: String = chars[start..=i].iter().collect();
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            // resume after the separating space
            start = i + 2;
            i += 2;
            continue;
        }
        i += 1;
    }

    let tail: String = chars[start..].iter().collect();
    let tail = tail.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Derive the implicit query: the last question sentence, else the first
/// sentence, else the stripped raw input.
pub fn extract_query(text: &str) -> String {
    let sentences = split_sentences(text);
    for sentence in sentences.iter().rev() {
        if sentence.ends_with('?') {
            return sentence.clone();
        }
    }
    sentences
        .into_iter()
        .next()
        .unwrap_or_else(|| text.trim().to_string())
}
