//! Crate error types
//!
//! Only the configuration surface is fallible; the scan itself swallows all
//! per-document and per-field failures by design and returns values.

use thiserror::Error;

/// Result type for ladspa-rdf operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
