//! Domain error types.

use thiserror::Error;

use crate::menu::{NotFound, ValidationError};

/// Errors that can occur during menu store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// A candidate dish failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record with the requested ID exists.
    #[error("{0}")]
    NotFound(#[from] NotFound),

    /// The shared store lock was poisoned by a panicking writer.
    #[error("Menu store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
