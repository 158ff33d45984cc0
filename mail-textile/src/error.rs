//! Error types for conversion operations

use thiserror::Error;

/// Errors surfaced by the converter.
///
/// Malformed HTML is never an error: the parser repairs it and the passes degrade to
/// approximate output. What remains are failures outside the markup itself.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Writing the DOM back out as markup failed
    #[error("HTML serialization failed: {0}")]
    Serialize(#[from] std::io::Error),
    /// The content-id map handed over by the mail layer is not a JSON object of strings
    #[error("invalid content-id map: {0}")]
    InvalidContentIdMap(#[from] serde_json::Error),
}
