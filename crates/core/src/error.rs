//! Domain error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic data or configuration problem. Nothing
/// here is transient, so callers should fix the input rather than retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A play carries a genre the pricing rules do not know.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play that is absent from the catalog.
    #[error("unknown play: {0}")]
    MissingPlay(PlayId),

    /// A value failed validation (e.g. a zero pricing constant).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. amount overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn missing_play(play_id: PlayId) -> Self {
        Self::MissingPlay(play_id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
