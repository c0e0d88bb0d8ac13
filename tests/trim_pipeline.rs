use trim_core::compression::{CompressionMode, PassthroughCompressor};
use trim_core::pipeline::{trim, Trimmer};
use trim_core::text::split_sentences;
use trim_core::types::{TrimConfig, TrimError, STRATEGY};

#[test]
fn polite_request_keeps_topic_and_intent() {
    let outcome =
        trim("Hi, could you please provide me with a comprehensive summary of the French Revolution?")
            .unwrap();

    assert!(outcome.text.contains("French Revolution"));
    assert!(outcome.text.contains("summary"));
    assert!(outcome.meta.kept >= 1);
    assert!(outcome.meta.tokens_after <= outcome.meta.tokens_before);
    assert_eq!(outcome.meta.strategy, STRATEGY);
    assert!(outcome.meta.query.ends_with('?'));
}

#[test]
fn negation_sentinel_survives_tight_budget() {
    let config = TrimConfig {
        token_budget: 8,
        ..TrimConfig::default()
    };
    let trimmer = Trimmer::new(config);
    let outcome = trimmer
        .trim("Do not delete these important records. This is unrelated filler about weather.")
        .unwrap();

    assert!(outcome.text.contains("not"), "negation must survive: {}", outcome.text);
    assert!(outcome.text.contains("records"));
    assert!(!outcome.text.contains("weather"));
    assert!(outcome.meta.tokens_after <= 8);
}

#[test]
fn degenerate_input_is_not_an_error() {
    let outcome = trim("").unwrap();
    assert_eq!(outcome.text, "");
    assert_eq!(outcome.meta.kept, 0);
    assert_eq!(outcome.meta.pool_size, 0);
    assert_eq!(outcome.meta.query, "");
    assert_eq!(outcome.meta.tokens_before, outcome.meta.tokens_after);

    let outcome = trim("   \n\t  ").unwrap();
    assert_eq!(outcome.text, "");
    assert_eq!(outcome.meta.kept, 0);
}

#[test]
fn output_never_empty_even_when_nothing_fits() {
    let config = TrimConfig {
        token_budget: 1,
        ..TrimConfig::default()
    };
    let trimmer = Trimmer::new(config);
    let outcome = trimmer
        .trim("Do not delete these important records. This is unrelated filler about weather.")
        .unwrap();

    // the forced fallback keeps the single best pool sentence and may exceed
    // the budget, by contract
    assert!(!outcome.text.is_empty());
    assert_eq!(outcome.meta.kept, 1);
}

#[test]
fn selected_sentences_come_from_the_input() {
    let input = "Alpha likes beta. Gamma goes delta. What is alpha? Epsilon zeta eta. Iota kappa.";
    let config = TrimConfig {
        token_budget: 12,
        keyword_top_k: 0, // isolate the selector from keyword repair
        ..TrimConfig::default()
    };
    let outcome = Trimmer::new(config).trim(input).unwrap();

    let originals = split_sentences(input);
    for sentence in split_sentences(&outcome.text) {
        assert!(
            originals.contains(&sentence),
            "output sentence {sentence:?} is not from the input"
        );
    }
    assert!(outcome.meta.tokens_after <= 12);
}

#[test]
fn larger_budget_never_shrinks_the_output() {
    let input = "Alpha likes beta. Gamma goes delta. What is alpha? Epsilon zeta eta. Iota kappa.";
    let mut previous = 0;
    for budget in [4, 8, 12] {
        let config = TrimConfig {
            token_budget: budget,
            keyword_top_k: 0,
            ..TrimConfig::default()
        };
        let outcome = Trimmer::new(config).trim(input).unwrap();
        assert!(
            outcome.meta.tokens_after >= previous,
            "budget {budget} produced fewer tokens than a smaller budget"
        );
        previous = outcome.meta.tokens_after;
    }
}

#[test]
fn out_of_range_lambda_is_rejected() {
    let config = TrimConfig {
        mmr_lambda: 1.5,
        ..TrimConfig::default()
    };
    let err = Trimmer::new(config).trim("Some text.").unwrap_err();
    assert!(matches!(err, TrimError::InvalidLambda(_)));

    let config = TrimConfig {
        mmr_lambda: f64::NAN,
        ..TrimConfig::default()
    };
    assert!(Trimmer::new(config).trim("Some text.").is_err());
}

#[test]
fn passthrough_compressor_leaves_text_unchanged() {
    let input = "Explain the process in detail. Give me a summary of the book.";
    let trimmer = Trimmer::default();

    let plain = trimmer.trim(input).unwrap();
    let compressed = trimmer
        .trim_compressed(input, &PassthroughCompressor, CompressionMode::Telegraphic)
        .unwrap();

    assert_eq!(compressed.text, plain.text);
    assert_eq!(compressed.meta.tokens_after, plain.meta.tokens_after);
    assert_eq!(compressed.meta.compression, Some(CompressionMode::Telegraphic));
    assert_eq!(plain.meta.compression, None);
}
