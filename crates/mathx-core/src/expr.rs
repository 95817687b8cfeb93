//! Expression values.
//!
//! An [`Expr`] is either an atom (symbol, number, string) or a compound
//! expression made of a head and an ordered sequence of leaves. Values are
//! immutable and cheap to clone: compound nodes and strings are shared
//! through `Arc`, symbols are interned.

use smallvec::SmallVec;
use std::fmt;
use std::sync::{Arc, LazyLock};

use mathx_numbers::{coerce, precision_of, Complex, Integer, Number, NumberError, NumberKind};

use crate::error::Result;
use crate::same::same_q;
use crate::symbol::{intern_symbol, system_symbol, Symbol};

/// Leaf storage; most expressions have few leaves.
pub type Leaves = SmallVec<[Expr; 4]>;

/// A value of the language.
#[derive(Clone, Debug)]
pub enum Expr {
    /// An interned symbol.
    Symbol(Symbol),
    /// A number of any kind.
    Number(Number),
    /// A string atom.
    String(Arc<str>),
    /// A head applied to leaves.
    Compound(Arc<Compound>),
}

/// A compound expression `head[leaves...]`.
#[derive(Debug)]
pub struct Compound {
    head: Expr,
    leaves: Leaves,
}

impl Compound {
    /// The head.
    #[must_use]
    pub fn head(&self) -> &Expr {
        &self.head
    }

    /// The leaves, in order.
    #[must_use]
    pub fn leaves(&self) -> &[Expr] {
        &self.leaves
    }
}

/// Head symbols of the atom kinds.
struct AtomHeads {
    integer: Symbol,
    rational: Symbol,
    machine_real: Symbol,
    precision_real: Symbol,
    complex: Symbol,
    string: Symbol,
}

static ATOM_HEADS: LazyLock<AtomHeads> = LazyLock::new(|| AtomHeads {
    integer: system_symbol(NumberKind::Integer.name()),
    rational: system_symbol(NumberKind::Rational.name()),
    machine_real: system_symbol(NumberKind::MachineReal.name()),
    precision_real: system_symbol(NumberKind::PrecisionReal.name()),
    complex: system_symbol(NumberKind::Complex.name()),
    string: system_symbol("String"),
});

impl Expr {
    /// Builds `head[leaves...]`. Never fails; heads and leaves are not
    /// checked.
    pub fn expression(head: impl Into<Expr>, leaves: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Compound(Arc::new(Compound {
            head: head.into(),
            leaves: leaves.into_iter().collect(),
        }))
    }

    /// Interns `raw_name` and wraps the symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedQualifiedName`](crate::CoreError::MalformedQualifiedName)
    /// for a malformed name.
    pub fn symbol(raw_name: &str) -> Result<Expr> {
        intern_symbol(raw_name).map(Expr::Symbol)
    }

    /// A string atom.
    pub fn string(text: impl Into<Arc<str>>) -> Expr {
        Expr::String(text.into())
    }

    /// An integer atom.
    #[must_use]
    pub fn integer(value: i64) -> Expr {
        Expr::Number(Number::Integer(Integer::new(value)))
    }

    /// A number atom.
    pub fn number(value: impl Into<Number>) -> Expr {
        Expr::Number(value.into())
    }

    /// A complex number from two numeric atoms.
    ///
    /// # Errors
    ///
    /// Returns an invalid-component error if either part is not a real
    /// number.
    pub fn complex(real: &Expr, imag: &Expr) -> Result<Expr> {
        let component = |part: &Expr| match part {
            Expr::Number(n) => Ok(n.clone()),
            other => Err(NumberError::InvalidComponentType {
                kind: other.kind_name(),
            }),
        };
        let number = Complex::new(component(real)?, component(imag)?)?;
        Ok(Expr::Number(number))
    }

    /// The head: the compound's head for expressions, otherwise the symbol
    /// named after the atom's kind.
    #[must_use]
    pub fn head(&self) -> Expr {
        let heads = &*ATOM_HEADS;
        let symbol = match self {
            Expr::Compound(c) => return c.head.clone(),
            Expr::Symbol(s) => s.head(),
            Expr::String(_) => heads.string.clone(),
            Expr::Number(n) => match n.kind() {
                NumberKind::Integer => heads.integer.clone(),
                NumberKind::Rational => heads.rational.clone(),
                NumberKind::MachineReal => heads.machine_real.clone(),
                NumberKind::PrecisionReal => heads.precision_real.clone(),
                NumberKind::Complex => heads.complex.clone(),
            },
        };
        Expr::Symbol(symbol)
    }

    /// The leaves; empty for atoms.
    #[must_use]
    pub fn leaves(&self) -> &[Expr] {
        match self {
            Expr::Compound(c) => &c.leaves,
            _ => &[],
        }
    }

    /// Name of this value's kind, as used by its head.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Symbol(_) => "Symbol",
            Expr::Number(n) => n.kind().name(),
            Expr::String(_) => "String",
            Expr::Compound(_) => "Expression",
        }
    }

    /// True for symbols, numbers and strings.
    #[must_use]
    pub fn is_atom(&self) -> bool {
        !matches!(self, Expr::Compound(_))
    }

    /// True for symbols.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Expr::Symbol(_))
    }

    /// True for numbers.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    /// True for strings.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Expr::String(_))
    }

    /// The symbol, if this is one.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is one.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }

    /// Binary precision of a real number.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-type error for anything but machine and
    /// precision reals.
    pub fn precision(&self) -> Result<u32> {
        Ok(precision_of(self.numeric("precision")?)?)
    }

    /// Rounds a number to machine precision or to `digits` decimal digits;
    /// see [`mathx_numbers::coerce`].
    ///
    /// # Errors
    ///
    /// Returns an unsupported-type error for non-numbers and an overflow
    /// error when a value leaves the machine range.
    pub fn coerce(&self, digits: Option<u32>) -> Result<Expr> {
        let number = self.numeric("coerce")?;
        Ok(Expr::Number(coerce(number, digits)?))
    }

    fn numeric(&self, operation: &'static str) -> Result<&Number> {
        self.as_number().ok_or_else(|| {
            NumberError::UnsupportedType {
                kind: self.kind_name(),
                operation,
            }
            .into()
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        same_q(self, other)
    }
}

impl Eq for Expr {}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<Number> for Expr {
    fn from(number: Number) -> Self {
        Expr::Number(number)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::integer(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::integer(i64::from(value))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Number(n) => write!(f, "{n}"),
            Expr::String(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Expr::Compound(c) => {
                write!(f, "{}[", c.head)?;
                for (i, leaf) in c.leaves.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{leaf}")?;
                }
                f.write_str("]")
            }
        }
    }
}
