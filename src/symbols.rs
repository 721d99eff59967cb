//! The allow-list of symbolic labels recognized by the path parser.
//!
//! Dot notation marks symbolic segments with a leading `:` (`"user.:id"`).
//! Such a segment only parses when its name was registered up front; an
//! unknown name is an [`InvalidKeyPath`](crate::Error::InvalidKeyPath) error.
//! Mappings read from untrusted configuration therefore cannot grow the set
//! of symbols a process knows about.
//!
//! ```rust
//! use serde_rekey::{KeyPath, SymbolTable};
//!
//! let symbols = SymbolTable::from_iter(["id", "name"]);
//! assert!(KeyPath::parse("user.:id", &symbols).is_ok());
//! assert!(KeyPath::parse("user.:email", &symbols).is_err());
//! ```

use crate::Symbol;
use indexmap::IndexSet;

/// A fixed set of symbolic labels, in registration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymbolTable(IndexSet<Symbol>);

impl SymbolTable {
    /// Creates an empty table. With an empty table every `:name` segment is rejected.
    #[must_use]
    pub fn new() -> Self {
        SymbolTable(IndexSet::new())
    }

    /// Registers `name` and returns its symbol. Registering twice is a no-op.
    pub fn register(&mut self, name: &str) -> Symbol {
        if let Some(existing) = self.0.get(name) {
            return existing.clone();
        }
        let symbol = Symbol::from_registered(name);
        self.0.insert(symbol.clone());
        symbol
    }

    /// Builder-style variant of [`SymbolTable::register`].
    #[must_use]
    pub fn with(mut self, name: &str) -> Self {
        self.register(name);
        self
    }

    /// Looks up a registered symbol without ever creating one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, Symbol> {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a str> for SymbolTable {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut table = SymbolTable::new();
        for name in iter {
            table.register(name);
        }
        table
    }
}

impl Extend<Symbol> for SymbolTable {
    fn extend<T: IntoIterator<Item = Symbol>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
