pub mod config;
pub mod report;

pub use config::TrimConfig;
pub use report::{TrimError, TrimMetadata, TrimOutcome, STRATEGY};
