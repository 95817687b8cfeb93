//! Lowering of syntax trees into expressions.
//!
//! Lowering runs in two phases. [`convert`] walks the syntax tree and
//! produces a [`Lowered`] value: every literal is decoded and classified, but
//! bare symbol names are left as [`Lowered::Lookup`]. [`materialize`] then
//! resolves every lookup, builds every number, and only once all of that has
//! succeeded interns the symbols and assembles the expression. A failure
//! anywhere leaves the symbol table as it was.

use mathx_core::{ContextName, Expr, Symbol, CONTEXT_MARK};
use mathx_numbers::{digits_from_f64, Integer, MachineReal, Number, PrecisionReal, Rational};

use crate::ast::SyntaxNode;
use crate::error::{LowerError, Result};
use crate::escape::{decode_filename, decode_string};
use crate::literal::convert_number;
use crate::resolver::NameResolver;

/// Where the value of an arbitrary-precision literal comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum PrecisionSource {
    /// Signed decimal text, possibly with an `E` exponent.
    DecimalString(String),
    /// An exact ratio `p / q`.
    Rational(Integer, Integer),
}

/// A syntax tree after literal decoding, before name resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum Lowered {
    /// A fully qualified symbol name.
    Symbol(String),
    /// A bare name awaiting resolution.
    Lookup(String),
    /// A decoded string.
    String(String),
    /// An exact integer.
    Integer(Integer),
    /// An exact ratio `p / q`.
    Rational(Integer, Integer),
    /// A machine real; checked for finiteness when materialized.
    MachineReal(f64),
    /// An arbitrary-precision real at a (possibly fractional) number of
    /// decimal digits.
    PrecisionReal(PrecisionSource, f64),
    /// `head[children...]`.
    Expression(Box<Lowered>, Vec<Lowered>),
}

impl Lowered {
    /// Name of the variant, for diagnostics.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Lowered::Symbol(_) => "Symbol",
            Lowered::Lookup(_) => "Lookup",
            Lowered::String(_) => "String",
            Lowered::Integer(_) => "Integer",
            Lowered::Rational(..) => "Rational",
            Lowered::MachineReal(_) => "MachineReal",
            Lowered::PrecisionReal(..) => "PrecisionReal",
            Lowered::Expression(..) => "Expression",
        }
    }
}

/// A lowered tree with names resolved and atoms built; only interning is
/// left to do.
enum Ready {
    Symbol(ContextName),
    Atom(Expr),
    Expression(Box<Ready>, Vec<Ready>),
}

/// First phase: decodes literals and classifies numbers.
///
/// # Errors
///
/// Returns [`LowerError::MalformedNumber`] for unreadable number literals.
pub fn convert(node: &SyntaxNode) -> Result<Lowered> {
    match node {
        SyntaxNode::Symbol {
            context: Some(context),
            name,
        } => Ok(Lowered::Symbol(format!("{context}{CONTEXT_MARK}{name}"))),
        SyntaxNode::Symbol {
            context: None,
            name,
        } => Ok(Lowered::Lookup(name.clone())),
        SyntaxNode::String { value } => Ok(Lowered::String(decode_string(value))),
        SyntaxNode::Filename { value } => Ok(Lowered::String(decode_filename(value))),
        SyntaxNode::Number(literal) => convert_number(literal),
        SyntaxNode::Node { head, children } => {
            let head = convert(head)?;
            let children = children.iter().map(convert).collect::<Result<Vec<_>>>()?;
            Ok(Lowered::Expression(Box::new(head), children))
        }
    }
}

/// Second phase: resolves names, builds numbers and interns symbols.
///
/// # Errors
///
/// Returns [`LowerError::UnresolvedSymbol`] when `resolver` has no name for
/// a lookup, a [`CoreError`](mathx_core::CoreError) for malformed symbol
/// names, and a [`NumberError`](mathx_numbers::NumberError) when a number
/// cannot be built, e.g. a machine real that overflows.
pub fn materialize<R>(lowered: Lowered, resolver: &R) -> Result<Expr>
where
    R: NameResolver + ?Sized,
{
    let ready = resolve(lowered, resolver)?;
    assemble(ready)
}

/// Lowers a syntax tree into an expression.
///
/// ```
/// use mathx_parser::{lower, SyntaxNode, SystemResolver};
///
/// let node = SyntaxNode::node(SyntaxNode::symbol("List"), [SyntaxNode::number("1.5")]);
/// let expr = lower(&node, &SystemResolver::default()).unwrap();
/// assert_eq!(expr.to_string(), "List[1.5]");
/// ```
///
/// # Errors
///
/// Fails as [`convert`] and [`materialize`] do.
pub fn lower<R>(node: &SyntaxNode, resolver: &R) -> Result<Expr>
where
    R: NameResolver + ?Sized,
{
    materialize(convert(node)?, resolver)
}

fn resolve<R>(lowered: Lowered, resolver: &R) -> Result<Ready>
where
    R: NameResolver + ?Sized,
{
    match lowered {
        Lowered::Symbol(qualified) => Ok(Ready::Symbol(ContextName::parse(&qualified)?)),
        Lowered::Lookup(name) => match resolver.resolve_unqualified_name(&name) {
            Some(qualified) => Ok(Ready::Symbol(ContextName::parse(&qualified)?)),
            None => {
                tracing::debug!(symbol = %name, "resolver has no name for symbol");
                Err(LowerError::UnresolvedSymbol(name))
            }
        },
        Lowered::String(text) => Ok(Ready::Atom(Expr::string(text))),
        Lowered::Integer(n) => atom(Number::Integer(n)),
        Lowered::Rational(p, q) => atom(Number::Rational(Rational::new(p, q)?)),
        Lowered::MachineReal(x) => atom(Number::MachineReal(MachineReal::new(x)?)),
        Lowered::PrecisionReal(source, digits) => {
            let digits = digits_from_f64(digits);
            let value = match source {
                PrecisionSource::DecimalString(text) => PrecisionReal::parse(&text, digits)?,
                PrecisionSource::Rational(p, q) => {
                    PrecisionReal::from_rational(&Rational::new(p, q)?, digits)
                }
            };
            atom(Number::PrecisionReal(value))
        }
        Lowered::Expression(head, children) => {
            let head = resolve(*head, resolver)?;
            let children = children
                .into_iter()
                .map(|child| resolve(child, resolver))
                .collect::<Result<Vec<_>>>()?;
            Ok(Ready::Expression(Box::new(head), children))
        }
    }
}

fn atom(number: Number) -> Result<Ready> {
    Ok(Ready::Atom(Expr::Number(number)))
}

fn assemble(ready: Ready) -> Result<Expr> {
    match ready {
        Ready::Symbol(name) => Ok(Expr::Symbol(Symbol::new_in(name.context(), name.name())?)),
        Ready::Atom(expr) => Ok(expr),
        Ready::Expression(head, children) => {
            let head = assemble(*head)?;
            let children = children
                .into_iter()
                .map(assemble)
                .collect::<Result<Vec<_>>>()?;
            Ok(Expr::expression(head, children))
        }
    }
}
