//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`]. Layout itself
//! never fails; errors come from reading and decoding input, validating
//! configuration, encoding output, and opt-in integrity checks.

use std::io;

use thiserror::Error;

/// The main error type for Arbor operations.
///
/// # Diagnostic Variants
///
/// The `Decode` variant keeps the source text next to the decoder error so
/// front ends can point at the offending line and column.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Decode error: {err}")]
    Decode { err: serde_json::Error, src: String },

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Integrity error: {0}")]
    Integrity(String),
}

impl ArborError {
    /// Create a new `Decode` error with the associated source text.
    pub fn new_decode_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Decode {
            err,
            src: src.into(),
        }
    }
}
