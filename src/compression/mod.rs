//! Optional post-processing hook for linguistic sentence compression.
//!
//! The pipeline's output is valid standalone text; a compressor only rewrites
//! already-selected sentences into a shorter form. The core never depends on
//! one being present.

use std::sync::Once;

use serde::{Deserialize, Serialize};

/// Output register requested from a compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    Readable,
    Telegraphic,
}

/// `(text, mode) -> text` contract for pluggable sentence compressors.
///
/// Implementations must return standalone text for any input and must not
/// fail; a backend that cannot compress should pass the text through.
pub trait Compressor {
    fn compress(&self, text: &str, mode: CompressionMode) -> String;
}

static PASSTHROUGH_WARNING: Once = Once::new();

/// Stand-in used when no linguistic backend is wired up.
///
/// Text passes through unchanged. A single diagnostic is emitted per process,
/// not per call.
#[derive(Debug, Default)]
pub struct PassthroughCompressor;

impl Compressor for PassthroughCompressor {
    fn compress(&self, text: &str, _mode: CompressionMode) -> String {
        PASSTHROUGH_WARNING.call_once(|| {
            tracing::warn!("no sentence compressor available, passing text through unchanged");
        });
        text.to_string()
    }
}
