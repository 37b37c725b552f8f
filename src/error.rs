//! Error types for the serde bridge and regex compilation.
//!
//! The form codec itself never fails: unknown tags pass through, undefined
//! values and root scalars are dropped, malformed payloads degrade to the
//! original string. Errors only surface where typed Rust data meets the
//! dynamic [`Value`](crate::Value) tree:
//!
//! - **Unsupported types**: a `Serialize` impl produced something that has no
//!   form representation (e.g. a map with non-string keys)
//! - **Type mismatches**: a decoded value does not fit the requested Rust type
//! - **Regex errors**: a [`RegexValue`](crate::RegexValue) carries an unknown
//!   flag or a pattern the `regex` crate rejects
//!
//! ## Examples
//!
//! ```rust
//! use serde_formdata::{from_value, Error, Value};
//!
//! let result: Result<u32, Error> = from_value(Value::from("not a number"));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised outside the graceful-degrading codec.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Unsupported type for conversion into a form value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Type mismatch while deserializing a decoded value
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Regex flag with no equivalent in the `regex` crate
    #[error("Invalid regex flag '{0}'")]
    InvalidRegexFlag(char),

    /// Pattern rejected by the regex compiler
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_formdata::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_error_converts() {
        let err: Error = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, Error::Regex(_)));
        assert!(err.to_string().starts_with("Regex error"));
    }

    #[test]
    fn test_invalid_flag_message() {
        assert_eq!(
            Error::InvalidRegexFlag('q').to_string(),
            "Invalid regex flag 'q'"
        );
    }
}
