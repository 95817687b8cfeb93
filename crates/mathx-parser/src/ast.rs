//! Syntax tree shapes produced by the external reader.
//!
//! The reader itself is not part of this crate; these types describe what it
//! hands over for lowering.

/// A number literal as written, before any value is computed.
///
/// `digits` holds the significand in `base`, possibly with one `.`. The
/// `suffix` is the text after a back-quote: `None` when absent, `""` for a
/// bare back-quote, `` "`N" `` for an accuracy and `"N"` for a precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberLiteral {
    /// `1` or `-1`.
    pub sign: i8,
    /// Significand digits in `base`.
    pub digits: String,
    /// Radix, `2..=36`.
    pub base: u32,
    /// Power of `base` the significand is scaled by.
    pub exponent: i64,
    /// Precision or accuracy mark.
    pub suffix: Option<String>,
}

impl NumberLiteral {
    /// A positive base-10 literal with no exponent or suffix.
    pub fn decimal(digits: impl Into<String>) -> Self {
        Self {
            sign: 1,
            digits: digits.into(),
            base: 10,
            exponent: 0,
            suffix: None,
        }
    }

    /// Sets the radix.
    #[must_use]
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Sets the exponent.
    #[must_use]
    pub fn with_exponent(mut self, exponent: i64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Sets the suffix text following the back-quote.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Negates the literal.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.sign = -self.sign;
        self
    }
}

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A symbol reference, qualified when `context` is present.
    Symbol {
        /// Context as written, without the trailing back-quote.
        context: Option<String>,
        /// Short name.
        name: String,
    },
    /// A string literal with its escapes still encoded.
    String {
        /// Raw text between the quotes.
        value: String,
    },
    /// A file name, possibly quoted.
    Filename {
        /// Raw text.
        value: String,
    },
    /// A number literal.
    Number(NumberLiteral),
    /// `head[children...]`.
    Node {
        /// The head node.
        head: Box<SyntaxNode>,
        /// Children in order.
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// An unqualified symbol reference.
    pub fn symbol(name: impl Into<String>) -> Self {
        SyntaxNode::Symbol {
            context: None,
            name: name.into(),
        }
    }

    /// A symbol reference qualified by `context`.
    pub fn qualified(context: impl Into<String>, name: impl Into<String>) -> Self {
        SyntaxNode::Symbol {
            context: Some(context.into()),
            name: name.into(),
        }
    }

    /// A raw string literal.
    pub fn string(value: impl Into<String>) -> Self {
        SyntaxNode::String {
            value: value.into(),
        }
    }

    /// A raw file name.
    pub fn filename(value: impl Into<String>) -> Self {
        SyntaxNode::Filename {
            value: value.into(),
        }
    }

    /// A positive base-10 number literal.
    pub fn number(digits: impl Into<String>) -> Self {
        SyntaxNode::Number(NumberLiteral::decimal(digits))
    }

    /// `head[children...]`.
    pub fn node(head: SyntaxNode, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        SyntaxNode::Node {
            head: Box::new(head),
            children: children.into_iter().collect(),
        }
    }
}

impl From<NumberLiteral> for SyntaxNode {
    fn from(literal: NumberLiteral) -> Self {
        SyntaxNode::Number(literal)
    }
}
