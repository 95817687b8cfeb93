//! # mathx-parser
//!
//! Lowering of syntax trees into mathx expressions.
//!
//! The reader that produces syntax trees lives outside this crate. Given a
//! [`SyntaxNode`], this crate:
//! - Decodes string and file-name literals
//! - Infers the kind and precision of number literals from their digits
//! - Resolves bare symbol names through a [`NameResolver`]
//! - Interns symbols and assembles the final [`Expr`](mathx_core::Expr)
//!
//! ## Example
//!
//! ```
//! use mathx_parser::{lower, NumberLiteral, SyntaxNode, SystemResolver};
//!
//! let node = SyntaxNode::node(
//!     SyntaxNode::symbol("Times"),
//!     [NumberLiteral::decimal("2").into(), SyntaxNode::qualified("Global", "x")],
//! );
//! let expr = lower(&node, &SystemResolver::default()).unwrap();
//! assert_eq!(expr.to_string(), "Times[2, x]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod error;
pub mod escape;
pub mod literal;
pub mod lower;
pub mod resolver;

#[cfg(test)]
mod proptests;

pub use ast::{NumberLiteral, SyntaxNode};
pub use error::{LowerError, Result};
pub use escape::{decode_filename, decode_string};
pub use literal::convert_number;
pub use lower::{convert, lower, materialize, Lowered, PrecisionSource};
pub use resolver::{NameResolver, SystemResolver};
