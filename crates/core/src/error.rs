//! Error types for gimo
//!
//! Two kinds of failure exist:
//! - [`ContractViolation`]: a run-time precondition was broken (a value was read
//!   from a null instance, an error from a value-holding one). These are fatal
//!   and only ever reach [`crate::assert::violated`], never a caller.
//! - [`Error`]: recoverable misuse of the library's own configuration surface.
//!
//! Recoverable failures of user code travel through the error channel of an
//! expected-like type, not through these types.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for gimo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable errors of the library surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A violation handler was installed before
    #[error("a contract violation handler is already installed")]
    HandlerAlreadyInstalled,
}

/// A broken run-time precondition
///
/// The type system cannot express whether a nullable holds a value, so the
/// resolver checks it before touching a channel. Each variant carries the
/// name of the offending type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// The value channel was read while the instance is null
    #[error("`{type_name}` must contain a value")]
    MissingValue {
        /// Type the value was read from
        type_name: &'static str,
    },

    /// The error channel was read while the instance holds a value
    #[error("`{type_name}` must hold an error")]
    MissingError {
        /// Type the error was read from
        type_name: &'static str,
    },

    /// A null-only operation received a value-holding instance
    #[error("`{type_name}` must not contain a value")]
    UnexpectedValue {
        /// Type of the offending instance
        type_name: &'static str,
    },
}

impl ContractViolation {
    /// Value of `T` was required but absent
    pub fn missing_value<T: ?Sized>() -> Self {
        ContractViolation::MissingValue {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Error of `T` was required but absent
    pub fn missing_error<T: ?Sized>() -> Self {
        ContractViolation::MissingError {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// `T` was required to be null but holds a value
    pub fn unexpected_value<T: ?Sized>() -> Self {
        ContractViolation::UnexpectedValue {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the type involved in the violation
    pub fn type_name(&self) -> &'static str {
        match self {
            ContractViolation::MissingValue { type_name }
            | ContractViolation::MissingError { type_name }
            | ContractViolation::UnexpectedValue { type_name } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_handler_already_installed() {
        let msg = Error::HandlerAlreadyInstalled.to_string();
        assert!(msg.contains("already installed"));
    }

    #[test]
    fn test_violation_display_missing_value() {
        let err = ContractViolation::missing_value::<Option<i32>>();
        let msg = err.to_string();
        assert!(msg.contains("must contain a value"));
        assert!(msg.contains("Option<i32>"));
    }

    #[test]
    fn test_violation_display_missing_error() {
        let err = ContractViolation::missing_error::<std::result::Result<i32, String>>();
        let msg = err.to_string();
        assert!(msg.contains("must hold an error"));
        assert!(msg.contains("Result<i32"));
    }

    #[test]
    fn test_violation_display_unexpected_value() {
        let err = ContractViolation::unexpected_value::<Option<u8>>();
        assert!(err.to_string().contains("must not contain a value"));
    }

    #[test]
    fn test_violation_type_name() {
        let err = ContractViolation::missing_value::<Option<i32>>();
        assert_eq!(err.type_name(), std::any::type_name::<Option<i32>>());
    }

    #[test]
    fn test_violation_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ContractViolation::missing_error::<()>());
        takes_error(&Error::HandlerAlreadyInstalled);
    }
}
