//! Context-qualified symbol names.
//!
//! A qualified name is a context and a short name joined by a back-quote,
//! e.g. ``System`Plus`` or ``Global`Private`x``. Contexts may themselves
//! contain back-quotes; the short name is everything after the last one.

use std::fmt;

use crate::error::{CoreError, Result};

/// Separator between a context and a short name.
pub const CONTEXT_MARK: char = '`';

/// Context given to names that do not carry one.
pub const SYSTEM_CONTEXT: &str = "System";

/// A `(context, short name)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextName {
    context: String,
    name: String,
}

impl ContextName {
    /// Builds a name from already separated parts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedQualifiedName`] if the parts do not form a
    /// well-formed qualified name.
    pub fn new(context: &str, name: &str) -> Result<Self> {
        let well_formed = !context.is_empty()
            && !name.is_empty()
            && !name.contains(CONTEXT_MARK)
            && !context.starts_with(CONTEXT_MARK)
            && !context.ends_with(CONTEXT_MARK)
            && !context.contains("``");
        if well_formed {
            Ok(Self {
                context: context.to_string(),
                name: name.to_string(),
            })
        } else {
            Err(CoreError::MalformedQualifiedName(format!(
                "{context}{CONTEXT_MARK}{name}"
            )))
        }
    }

    /// Splits `raw` at its last back-quote, defaulting to the `System`
    /// context when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedQualifiedName`] for an empty name, an
    /// empty context or short name, or a doubled back-quote.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.rfind(CONTEXT_MARK) {
            Some(at) => Self::new(&raw[..at], &raw[at + 1..])
                .map_err(|_| CoreError::MalformedQualifiedName(raw.to_string())),
            None if raw.is_empty() => Err(CoreError::MalformedQualifiedName(String::new())),
            None => Self::new(SYSTEM_CONTEXT, raw),
        }
    }

    /// The context, without a trailing back-quote.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The short name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ContextName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{CONTEXT_MARK}{}", self.context, self.name)
    }
}

/// Whether `value` is written as a context: it ends with a back-quote, has no
/// doubled back-quote, and starts with one only if `allow_initial_mark`.
#[must_use]
pub fn is_qualified_context(value: &str, allow_initial_mark: bool) -> bool {
    value.ends_with(CONTEXT_MARK)
        && !value.contains("``")
        && (allow_initial_mark || !value.starts_with(CONTEXT_MARK))
}

/// Completes `name` with `context` unless it is already qualified.
///
/// A name with a leading back-quote is relative to `context`.
///
/// # Errors
///
/// Returns [`CoreError::MalformedQualifiedName`] if `name` is empty or the
/// completed name is not well formed.
pub fn qualify(name: &str, context: &str) -> Result<String> {
    if name.is_empty() {
        return Err(CoreError::MalformedQualifiedName(String::new()));
    }
    let qualified = if name.starts_with(CONTEXT_MARK) {
        format!("{context}{name}")
    } else if name.contains(CONTEXT_MARK) {
        name.to_string()
    } else {
        format!("{context}{CONTEXT_MARK}{name}")
    };
    ContextName::parse(&qualified)?;
    Ok(qualified)
}
