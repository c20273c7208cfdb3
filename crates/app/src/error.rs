//! Application error types.

use common::ParseMenuItemIdError;
use domain::MenuError;
use thiserror::Error;
use views::ParseCourseFilterError;

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("missing argument, usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("expected 4 fields separated by `|`, found {found}")]
    AddFields { found: usize },

    #[error(transparent)]
    InvalidId(#[from] ParseMenuItemIdError),

    #[error(transparent)]
    InvalidFilter(#[from] ParseCourseFilterError),
}

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The menu store rejected an operation.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The input line was not a valid command.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Failed to serialize the menu.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns true if the user can simply correct their input and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Menu(_) | AppError::Command(_))
    }
}
