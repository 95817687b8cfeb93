//! Errors raised while lowering a syntax tree.

use mathx_core::CoreError;
use mathx_numbers::NumberError;
use thiserror::Error;

/// Errors that abort a lowering.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LowerError {
    /// The resolver produced no qualified name for a bare symbol.
    #[error("cannot resolve symbol {0:?}")]
    UnresolvedSymbol(String),

    /// A number literal whose digits or suffix cannot be read.
    #[error("malformed number literal: {0}")]
    MalformedNumber(String),

    /// Building a symbol or expression failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Building a number failed.
    #[error(transparent)]
    Number(#[from] NumberError),
}

/// Result alias for lowering.
pub type Result<T> = std::result::Result<T, LowerError>;
