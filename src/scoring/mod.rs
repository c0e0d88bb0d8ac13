pub mod bm25;
pub mod tfidf;

pub use bm25::{bm25_scores, Bm25Params};
pub use tfidf::{cosine, tfidf_vectors, TermVector};
