//! Errors raised by numeric construction and precision queries.

use thiserror::Error;

/// Errors that can occur while building or converting numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// A machine real would be infinite or NaN.
    #[error("machine real overflow: value is not finite")]
    Overflow,

    /// A complex component was itself complex, or not a number.
    #[error("invalid complex component: expected a real number, got {kind}")]
    InvalidComponentType {
        /// Kind of the offending component.
        kind: &'static str,
    },

    /// A precision operation was applied to a value that has no precision.
    #[error("{operation} is not supported for {kind}")]
    UnsupportedType {
        /// Kind of the offending value.
        kind: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// A rational was given a zero denominator.
    #[error("rational with zero denominator")]
    ZeroDenominator,

    /// A numeric literal could not be parsed.
    #[error("malformed numeric literal: {0}")]
    MalformedLiteral(String),
}

/// Result alias for numeric operations.
pub type Result<T> = std::result::Result<T, NumberError>;
