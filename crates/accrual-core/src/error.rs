//! Error types for the accrual library.
//!
//! This module defines the error types used throughout the crate,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for accrual operations.
pub type AccrualResult<T> = Result<T, AccrualError>;

/// The main error type for accrual operations.
///
/// All errors are reported synchronously to the caller. None of them are
/// recoverable internally: the computations are deterministic, so a retry
/// with the same inputs cannot change the outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrualError {
    /// Date components do not form a real calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A convention-specific required input was omitted.
    #[error("Missing parameter for {convention}: {parameter}")]
    MissingParameter {
        /// Name of the convention that needs the parameter.
        convention: &'static str,
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Coupon type is neither semi-annual nor annual (ACT/365L only).
    #[error("Invalid coupon type: '{value}' (expected 'semi-annual' or 'annual')")]
    InvalidCouponType {
        /// The rejected coupon type string.
        value: String,
    },

    /// The dispatcher received an unrecognized convention identifier.
    #[error("Unknown day count convention: '{name}'")]
    UnknownConvention {
        /// The unrecognized identifier.
        name: String,
    },

    /// The requested convention is a known identifier without an implementation.
    #[error("Day count convention not implemented: {convention}")]
    NotImplemented {
        /// Name of the unimplemented convention.
        convention: &'static str,
    },
}

impl AccrualError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a missing parameter error.
    #[must_use]
    pub fn missing_parameter(convention: &'static str, parameter: &'static str) -> Self {
        Self::MissingParameter {
            convention,
            parameter,
        }
    }

    /// Creates an invalid coupon type error.
    #[must_use]
    pub fn invalid_coupon_type(value: impl Into<String>) -> Self {
        Self::InvalidCouponType {
            value: value.into(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }

    /// Creates a not implemented error.
    #[must_use]
    pub fn not_implemented(convention: &'static str) -> Self {
        Self::NotImplemented { convention }
    }
}
