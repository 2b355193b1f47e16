//! Shared Error Types
//!
//! Input rejected before it reaches a store. The backend turns it into a
//! 400 envelope carrying the bare message.
//!
//! ```rust
//! use shopsmart::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email format");
//! assert_eq!(error.message(), "Invalid email format");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The offending field
        field: String,
        /// User-facing message
        message: String,
    },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The bare message, without the field prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_strips_field() {
        let error = SharedError::validation("password", "Password must be at least 6 characters long");
        assert!(matches!(&error, SharedError::ValidationError { field, .. } if field == "password"));
        assert_eq!(error.message(), "Password must be at least 6 characters long");
        assert!(error.to_string().contains("'password'"));
    }
}
