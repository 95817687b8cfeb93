//! # mathx
//!
//! The expression/value kernel of the mathx symbolic computation language.
//!
//! mathx defines how every value of the language is represented, how
//! numeric precision is tracked, how two values are tested for exact
//! structural identity, and how a parsed syntax tree becomes a value.
//!
//! ## Features
//!
//! - **Numeric Tower**: exact integers and rationals, machine reals,
//!   arbitrary-precision reals and complex numbers
//! - **Interned Symbols**: one process-wide table, identity by pointer
//! - **Structural Identity**: `same_q` with exact machine/precision
//!   reconciliation
//! - **Lowering**: syntax trees to expressions with precision inference
//!
//! ## Quick Start
//!
//! ```rust
//! use mathx::prelude::*;
//!
//! let node = SyntaxNode::node(
//!     SyntaxNode::symbol("f"),
//!     [SyntaxNode::number("0.5"), SyntaxNode::number("1.234567890123456789012345")],
//! );
//! let expr = lower(&node, &SystemResolver::with_context("Global")).unwrap();
//!
//! assert_eq!(expr.head(), Expr::symbol("Global`f").unwrap());
//! assert_eq!(expr.leaves()[1].precision().unwrap(), 86);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use mathx_core as core;
pub use mathx_numbers as numbers;
pub use mathx_parser as parser;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mathx_core::{intern_symbol, same_q, CoreError, Expr, Symbol};
    pub use mathx_numbers::{
        coerce, make_real, Complex, Integer, MachineReal, Number, NumberError, PrecisionReal,
        Rational, RealInput,
    };
    pub use mathx_parser::{
        lower, LowerError, NameResolver, NumberLiteral, SyntaxNode, SystemResolver,
    };
}
