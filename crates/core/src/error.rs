//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The daily update itself never fails; these cover the edges around it
/// (loading and snapshotting stock lists).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty stock list).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Input could not be decoded.
    #[error("parse failed: {0}")]
    Parse(String),

    /// State could not be encoded.
    #[error("encode failed: {0}")]
    Encode(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
