//! Interned symbols.
//!
//! Every symbol lives in one process-wide table keyed by its qualified name,
//! so two symbols with the same qualified name are always the same
//! allocation and compare by pointer. Symbols are never removed.
//!
//! The table is guarded by a single lock and lookup-or-insert happens inside
//! one critical section, so concurrent interning of the same name cannot
//! produce two instances.
//!
//! The root symbol ``System`Symbol`` is the head of every symbol, itself
//! included. It is registered when the table is created, before any other
//! symbol exists.

use hashbrown::HashMap;
use parking_lot::Mutex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use crate::context::{ContextName, SYSTEM_CONTEXT};
use crate::error::Result;

/// Short name of the root symbol.
pub const ROOT_SYMBOL_NAME: &str = "Symbol";

/// An interned, context-qualified symbol.
#[derive(Clone)]
pub struct Symbol(Arc<SymbolInner>);

struct SymbolInner {
    qualified: Box<str>,
    /// Byte offset of the short name within `qualified`.
    split: usize,
}

/// The interning table: qualified name to the unique symbol.
struct SymbolTable {
    symbols: HashMap<Box<str>, Symbol>,
    root: Symbol,
}

impl SymbolTable {
    fn new() -> Self {
        let root = Symbol::allocate(SYSTEM_CONTEXT, ROOT_SYMBOL_NAME);
        let mut symbols = HashMap::with_capacity(256);
        symbols.insert(root.0.qualified.clone(), root.clone());
        Self { symbols, root }
    }

    fn intern(&mut self, name: &ContextName) -> Symbol {
        self.intern_parts(name.context(), name.name())
    }

    fn intern_parts(&mut self, context: &str, name: &str) -> Symbol {
        let qualified = format!("{context}`{name}");
        if let Some(symbol) = self.symbols.get(qualified.as_str()) {
            return symbol.clone();
        }

        let symbol = Symbol::allocate(context, name);
        tracing::trace!(symbol = %qualified, "interned new symbol");
        self.symbols.insert(qualified.into_boxed_str(), symbol.clone());
        symbol
    }

    fn get(&self, qualified: &str) -> Option<Symbol> {
        self.symbols.get(qualified).cloned()
    }

    fn len(&self) -> usize {
        self.symbols.len()
    }
}

static SYMBOL_TABLE: LazyLock<Mutex<SymbolTable>> =
    LazyLock::new(|| Mutex::new(SymbolTable::new()));

static ROOT: LazyLock<Symbol> = LazyLock::new(|| SYMBOL_TABLE.lock().root.clone());

/// Interns `raw_name`, returning the unique symbol for it.
///
/// The name is split at its last back-quote into context and short name;
/// without a back-quote the context is `System`.
///
/// # Errors
///
/// Returns [`CoreError::MalformedQualifiedName`](crate::CoreError::MalformedQualifiedName)
/// if `raw_name` is not well formed. The table is not touched in that case.
///
/// # Examples
///
/// ```
/// use mathx_core::intern_symbol;
///
/// let a = intern_symbol("Global`x").unwrap();
/// let b = intern_symbol("Global`x").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(intern_symbol("Plus").unwrap().qualified_name(), "System`Plus");
/// ```
pub fn intern_symbol(raw_name: &str) -> Result<Symbol> {
    let name = ContextName::parse(raw_name)?;
    Ok(SYMBOL_TABLE.lock().intern(&name))
}

/// Finds an already interned symbol without creating one.
///
/// # Errors
///
/// Returns [`CoreError::MalformedQualifiedName`](crate::CoreError::MalformedQualifiedName)
/// if `raw_name` is not well formed.
pub fn lookup_symbol(raw_name: &str) -> Result<Option<Symbol>> {
    let name = ContextName::parse(raw_name)?;
    Ok(SYMBOL_TABLE.lock().get(&name.to_string()))
}

/// Number of symbols interned so far, the root symbol included.
#[must_use]
pub fn symbol_count() -> usize {
    SYMBOL_TABLE.lock().len()
}

/// The root symbol ``System`Symbol``, head of every symbol.
#[must_use]
pub fn root_symbol() -> Symbol {
    ROOT.clone()
}

/// Interns a name in the `System` context. `name` must be a valid short name.
pub(crate) fn system_symbol(name: &'static str) -> Symbol {
    debug_assert!(!name.is_empty() && !name.contains('`'));
    SYMBOL_TABLE.lock().intern_parts(SYSTEM_CONTEXT, name)
}

impl Symbol {
    fn allocate(context: &str, name: &str) -> Self {
        Self(Arc::new(SymbolInner {
            qualified: format!("{context}`{name}").into_boxed_str(),
            split: context.len() + 1,
        }))
    }

    /// Interns the symbol `name` in `context`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedQualifiedName`](crate::CoreError::MalformedQualifiedName)
    /// if the parts are not well formed.
    pub fn new_in(context: &str, name: &str) -> Result<Self> {
        let name = ContextName::new(context, name)?;
        Ok(SYMBOL_TABLE.lock().intern(&name))
    }

    /// The context, e.g. `System`.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.0.qualified[..self.0.split - 1]
    }

    /// The name within the context.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.0.qualified[self.0.split..]
    }

    /// The full ``context`name`` form.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.0.qualified
    }

    /// The head of a symbol is the root symbol; the root is its own head.
    #[must_use]
    pub fn head(&self) -> Symbol {
        root_symbol()
    }

    /// True for ``System`Symbol``.
    #[must_use]
    pub fn is_root(&self) -> bool {
        *self == *ROOT
    }

    /// True if both handles refer to the same interned symbol.
    #[must_use]
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.qualified_name())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
