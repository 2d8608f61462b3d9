//! Error types for gencheck.

use thiserror::Error;

/// Main error type for generator construction and resolution.
///
/// A predicate returning `false` is not an error: it is a failing sample
/// recorded in the [`CheckResult`](crate::CheckResult). Errors raised by a
/// fallible predicate are never wrapped in this type; see
/// [`try_check`](crate::try_check).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GencheckError {
    /// No generator is registered for the requested type.
    #[error("No generator registered for type `{type_name}`")]
    UnresolvedType { type_name: &'static str },

    /// A generator or run was configured with inconsistent bounds.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl GencheckError {
    /// Error for a `min > max` bound pair.
    pub(crate) fn inverted<T: std::fmt::Debug>(what: &str, min: T, max: T) -> Self {
        GencheckError::InvalidConfiguration {
            message: format!("{what} minimum {min:?} is greater than maximum {max:?}"),
        }
    }
}

/// Result type for gencheck operations.
pub type Result<T> = std::result::Result<T, GencheckError>;
