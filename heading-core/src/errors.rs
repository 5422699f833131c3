//! Error types for sensor orientation math.
//!
//! This module provides the unified error type [`HeadingError`] shared by every
//! crate in the workspace. The failure surface is deliberately small: input
//! validation happens up front and raises [`Parameter`](HeadingError::Parameter);
//! anything that goes wrong after validation (which in practice means an internal
//! invariant was broken, not a caller mistake) raises
//! [`Service`](HeadingError::Service).
//!
//! Numerically degenerate input is **not** an error. A zero gravity vector or an
//! infinite pressure flows through the math under IEEE 754 rules and surfaces as
//! NaN or infinity in the result, so callers can distinguish "you passed a slice
//! of the wrong length" (an `Err`) from "your sensor data was garbage" (a value
//! full of NaN).
//!
//! # Error Codes
//!
//! Each variant carries a stable numeric code for callers that report errors
//! across a process boundary:
//!
//! | Variant | Code | Meaning |
//! |---------|------|---------|
//! | [`Parameter`](HeadingError::Parameter) | 401 | Invalid argument (wrong length, same axis twice, ...) |
//! | [`Service`](HeadingError::Service) | 14500101 | Internal computation failure |
//!
//! # Usage
//!
//! Most fallible functions return [`HeadingResult<T>`], which is
//! `Result<T, HeadingError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use heading_core::{HeadingError, HeadingResult};
//!
//! fn first_nine(data: &[f64]) -> HeadingResult<&[f64]> {
//!     if data.len() < 9 {
//!         return Err(HeadingError::parameter(
//!             "first_nine",
//!             &format!("expected at least 9 elements, got {}", data.len()),
//!         ));
//!     }
//!     Ok(&data[..9])
//! }
//!
//! assert_eq!(first_nine(&[0.0; 3]).unwrap_err().code(), 401);
//! ```

use thiserror::Error;

/// Stable code reported for invalid-argument failures.
pub const PARAMETER_ERROR_CODE: i32 = 401;

/// Stable code reported for internal service failures.
pub const SERVICE_ERROR_CODE: i32 = 14500101;

/// Unified error type for orientation and geomagnetic calculations.
///
/// Use the constructor methods ([`parameter`](Self::parameter),
/// [`service`](Self::service)) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadingError {
    /// An argument failed validation before any computation ran.
    #[error("Parameter error in {operation}: {message}")]
    Parameter { operation: String, message: String },

    /// The computation itself failed. Callers cannot fix this by changing
    /// arguments.
    #[error("Service exception in {operation}: {message}")]
    Service { operation: String, message: String },
}

/// Convenience alias for `Result<T, HeadingError>`.
pub type HeadingResult<T> = Result<T, HeadingError>;

impl HeadingError {
    /// Creates a [`Parameter`](Self::Parameter) error.
    pub fn parameter(operation: &str, reason: &str) -> Self {
        Self::Parameter {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`Service`](Self::Service) error.
    pub fn service(operation: &str, reason: &str) -> Self {
        Self::Service {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the stable numeric code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::Parameter { .. } => PARAMETER_ERROR_CODE,
            Self::Service { .. } => SERVICE_ERROR_CODE,
        }
    }

    /// Returns `true` if this error was caused by an invalid argument.
    ///
    /// Parameter errors are the caller's to fix; service errors are not.
    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error() {
        let err = HeadingError::parameter("orientation_angles", "expected 9 elements, got 3");
        assert_eq!(
            err.to_string(),
            "Parameter error in orientation_angles: expected 9 elements, got 3"
        );
        assert_eq!(err.code(), 401);
        assert!(err.is_parameter());
    }

    #[test]
    fn test_service_error() {
        let err = HeadingError::service("remap", "output length mismatch");
        assert!(err.to_string().contains("Service exception in remap"));
        assert_eq!(err.code(), 14500101);
        assert!(!err.is_parameter());
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<HeadingError>();
        _assert_sync::<HeadingError>();
    }
}
