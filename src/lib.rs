//! Deterministic, LLM-free prompt trimming.
//!
//! `trim-core` extracts a budget-constrained subset of sentences from an
//! input text that best preserves its informational content, using only
//! corpus statistics computed over the input itself: BM25 relevance against
//! an implicit query, MMR diversity over TF-IDF vectors, 0/1-knapsack budget
//! selection, and a keyword-preservation repair pass. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte.

pub mod compression;
pub mod keywords;
pub mod pipeline;
pub mod scoring;
pub mod selection;
pub mod text;
pub mod types;
