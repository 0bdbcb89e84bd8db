// ABOUTME: Error types for reading decoding and workout statistics
// ABOUTME: Two failure kinds - unknown workout code and invalid numeric input

//! # Error Handling
//!
//! All fallible operations in this crate return [`AppResult`]. There are only
//! two failure kinds: a sensor packet carrying a workout type code we do not
//! recognize, and numeric input that cannot produce a meaningful summary
//! (wrong arity, non-positive duration, and similar).
//!
//! Unknown codes are recoverable during batch processing - the batch runner
//! reports them and moves on. Invalid input fails the affected entry only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Numeric input rejected (arity mismatch, non-positive measurement)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Workout type code not in the supported set
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType,
}

/// Unified error type for the workout statistics engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// The numeric inputs for a reading cannot produce a valid summary
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// The reading carried a workout type code outside the supported set
    ///
    /// Display text matches the diagnostic line the reference tracker prints
    /// for unrecognized sensor packets.
    #[error("Данные о тренировке \"{code}\" не найдены")]
    UnknownWorkoutType {
        /// The unrecognized type code, verbatim from the reading
        code: String,
    },
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unknown-workout-type error for the given code
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Get the stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::UnknownWorkoutType { .. } => ErrorCode::UnknownWorkoutType,
        }
    }
}

/// Result type alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_diagnostic_names_the_code() {
        let err = AppError::unknown_workout_type("XYZ");
        assert!(err.to_string().contains("\"XYZ\""));
        assert_eq!(err.code(), ErrorCode::UnknownWorkoutType);
    }

    #[test]
    fn test_invalid_input_carries_message() {
        let err = AppError::invalid_input("duration must be positive");
        assert!(err.to_string().contains("duration must be positive"));
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }
}
