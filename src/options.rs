//! Configuration options for mapping construction and formatting.
//!
//! - [`RekeyOptions::symbols`]: the symbolic labels `:name` path segments may use
//! - [`RekeyOptions::max_depth`]: the deepest container nesting the formatter will walk
//!
//! ## Examples
//!
//! ```rust
//! use serde_rekey::{format_with_options, tree, RekeyOptions};
//!
//! let options = RekeyOptions::new().with_symbol("id").with_max_depth(16);
//! let renamed = format_with_options(tree!({"uid": 1}), [("uid", ":id")], &options).unwrap();
//! assert_eq!(renamed.to_string(), "{:id: 1}");
//! ```

use crate::SymbolTable;

/// Default bound on container nesting, matching common serde format defaults.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`format_with_options`](crate::format_with_options).
#[derive(Clone, Debug, PartialEq)]
pub struct RekeyOptions {
    pub symbols: SymbolTable,
    /// `None` disables the bound; the caller then guarantees a shallow, acyclic tree.
    pub max_depth: Option<usize>,
}

impl Default for RekeyOptions {
    fn default() -> Self {
        RekeyOptions {
            symbols: SymbolTable::new(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl RekeyOptions {
    /// Creates default options: no symbols, depth bounded at [`DEFAULT_MAX_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::RekeyOptions;
    ///
    /// let options = RekeyOptions::new();
    /// assert!(options.symbols.is_empty());
    /// assert_eq!(options.max_depth, Some(128));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the symbol table.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Registers one more symbolic label.
    #[must_use]
    pub fn with_symbol(mut self, name: &str) -> Self {
        self.symbols.register(name);
        self
    }

    /// Sets the maximum container nesting the formatter walks.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting bound.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
