//! # mathx-core
//!
//! Expression and symbol model of the mathx kernel.
//!
//! This crate provides:
//! - Interned, context-qualified symbols with O(1) identity comparison
//! - Immutable expressions: atoms (symbols, numbers, strings) and compound
//!   `head[leaves...]` nodes
//! - Structural identity (`same_q`) that reconciles machine and
//!   arbitrary-precision reals exactly
//!
//! ## Design Principles
//!
//! - **Interning**: one allocation per qualified name, for the life of the
//!   process
//! - **Sharing**: compound nodes and strings are `Arc`-shared, so clones are
//!   cheap and values can cross threads freely
//! - **Closed numeric kinds**: every numeric rule is an exhaustive match over
//!   [`Number`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod expr;
pub mod same;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use context::{is_qualified_context, qualify, ContextName, CONTEXT_MARK, SYSTEM_CONTEXT};
pub use error::{CoreError, Result};
pub use expr::{Compound, Expr, Leaves};
pub use same::{same_number, same_q};
pub use symbol::{
    intern_symbol, lookup_symbol, root_symbol, symbol_count, Symbol, ROOT_SYMBOL_NAME,
};

pub use mathx_numbers::Number;
