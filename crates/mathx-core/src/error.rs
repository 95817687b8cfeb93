//! Errors raised by the expression model.

use mathx_numbers::NumberError;
use thiserror::Error;

/// Errors that can occur while building expressions or symbols.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A symbol name is empty or not a well-formed qualified name.
    #[error("malformed qualified name: {0:?}")]
    MalformedQualifiedName(String),

    /// A numeric operation failed.
    #[error(transparent)]
    Number(#[from] NumberError),
}

/// Result alias for expression operations.
pub type Result<T> = std::result::Result<T, CoreError>;
