//! Error types for statement building.

use thiserror::Error;

/// Errors that can occur while converting JSON to statements.
///
/// The statement builder itself is total over any well-formed
/// `serde_json::Value`; the only failure path is parsing raw text in
/// [`crate::convert`].
#[derive(Error, Debug)]
pub enum PystmtError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout pystmt-core.
pub type Result<T> = std::result::Result<T, PystmtError>;
