pub mod sentences;
pub mod tokenize;

pub use sentences::{extract_query, split_sentences};
pub use tokenize::{rough_token_count, word_tokens};
