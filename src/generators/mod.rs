// src/generators/mod.rs
use thiserror::Error;

use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub mod charset;
pub mod password;

pub use charset::CharacterSets;
pub use password::PasswordGenerator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters")]
    InvalidLength { length: i64, min: i64, max: i64 },

    #[error("At least one character type must be selected")]
    NoCharacterClassSelected,

    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

impl GeneratorError {
    pub(crate) fn invalid_length(length: i64) -> Self {
        GeneratorError::InvalidLength {
            length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        }
    }

    /// Stable identifier sent to API clients
    pub fn code(&self) -> &'static str {
        match self {
            GeneratorError::InvalidLength { .. } => "INVALID_LENGTH",
            GeneratorError::NoCharacterClassSelected => "NO_CHARACTER_CLASS_SELECTED",
            GeneratorError::InternalInvariantViolation(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_user_error(&self) -> bool {
        !matches!(self, GeneratorError::InternalInvariantViolation(_))
    }
}
