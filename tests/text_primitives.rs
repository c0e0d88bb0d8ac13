use trim_core::text::{extract_query, rough_token_count, split_sentences, word_tokens};

#[test]
fn split_requires_uppercase_digit_or_quote_after_terminal() {
    let sentences = split_sentences("First point. Second point. third continues.");
    assert_eq!(
        sentences,
        vec![
            "First point.".to_string(),
            "Second point. third continues.".to_string(),
        ],
        "a lowercase continuation must not open a new sentence"
    );
}

#[test]
fn split_normalizes_internal_whitespace() {
    let sentences = split_sentences("A  b.\n\nNext   thing.");
    assert_eq!(sentences, vec!["A b.".to_string(), "Next thing.".to_string()]);
}

#[test]
fn split_accepts_quote_and_digit_openers() {
    let sentences = split_sentences("He left. \"Stay here.\" Step one done! 2 follows.");
    assert_eq!(
        sentences,
        vec![
            "He left.".to_string(),
            // the closing quote sits between the period and the space, so no
            // boundary fires inside the quotation
            "\"Stay here.\" Step one done!".to_string(),
            "2 follows.".to_string(),
        ]
    );
}

#[test]
fn split_empty_and_whitespace_yield_nothing() {
    assert!(split_sentences("").is_empty());
    assert!(split_sentences("   \n\t  ").is_empty());
}

#[test]
fn word_tokens_lowercase_and_keep_apostrophes() {
    assert_eq!(
        word_tokens("Don't STOP now."),
        vec!["don't".to_string(), "stop".to_string(), "now".to_string()]
    );
}

#[test]
fn rough_count_words_plus_punctuation() {
    assert_eq!(rough_token_count("Hello, world!"), 4);
    assert_eq!(rough_token_count("word"), 1);
}

#[test]
fn rough_count_never_zero() {
    assert_eq!(rough_token_count(""), 1);
    assert!(rough_token_count("x") >= 1);
}

#[test]
fn rough_count_monotone_in_length() {
    let shorter = rough_token_count("alpha beta");
    let longer = rough_token_count("alpha beta gamma!");
    assert!(shorter <= longer);
}

#[test]
fn query_is_last_question() {
    let query = extract_query("First ask? Then another ask? Done.");
    assert_eq!(query, "Then another ask?");
}

#[test]
fn query_falls_back_to_first_sentence() {
    let query = extract_query("Intro statement. Final remark.");
    assert_eq!(query, "Intro statement.");
}

#[test]
fn query_falls_back_to_stripped_input() {
    assert_eq!(extract_query("   "), "");
}
