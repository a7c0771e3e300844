//! Error type for the binary's fallible edges.
//!
//! The screen logic itself cannot fail; everything here comes from the
//! terminal or from output formatting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing, or restoration failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Render tree could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
