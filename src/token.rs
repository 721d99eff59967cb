//! Key tokens, the atomic segments of a key path.
//!
//! A [`KeyToken`] addresses one level of a tree. It is one of:
//!
//! - [`KeyToken::Str`]: an ordinary string label, the common case for keys
//!   that arrive from JSON and other text formats
//! - [`KeyToken::Sym`]: a symbolic label drawn from a fixed set, used for
//!   record field names and for `:name` segments in dot notation
//! - [`KeyToken::Lit`]: a literal key that dot notation cannot express, such
//!   as an integer, a float, or a raw string containing the separator
//!
//! Tokens compare structurally, so `Str("a")` and `Sym("a")` are different keys.
//!
//! ```rust
//! use serde_rekey::{KeyToken, Literal};
//!
//! assert_eq!(KeyToken::from("a"), KeyToken::Str("a".to_string()));
//! assert_ne!(KeyToken::from("a"), KeyToken::sym("a"));
//! assert_eq!(KeyToken::from(7), KeyToken::Lit(Literal::Integer(7)));
//! ```

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An interned symbolic label.
///
/// Symbols are never created from arbitrary runtime text. They come from a
/// [`SymbolTable`](crate::SymbolTable) lookup or from a `&'static str` that is
/// part of the program, such as a struct field name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol from a label compiled into the program.
    #[must_use]
    pub fn from_static(name: &'static str) -> Self {
        Symbol(Arc::from(name))
    }

    pub(crate) fn from_registered(name: &str) -> Self {
        Symbol(Arc::from(name))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A literal key: a number or a raw string taken verbatim.
#[derive(Clone, Debug)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Raw(String),
}

// Floats compare by bit pattern so literals can live in hashed maps.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Integer(a), Literal::Integer(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
            (Literal::Raw(a), Literal::Raw(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::Integer(i) => i.hash(state),
            Literal::Float(f) => f.to_bits().hash(state),
            Literal::Raw(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Float(fl) => write!(f, "{:?}", fl),
            Literal::Raw(s) => write!(f, "{:?}", s),
        }
    }
}

/// One segment of a key path, and the key type of [`KeyMap`](crate::KeyMap).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Str(String),
    Sym(Symbol),
    Lit(Literal),
}

impl KeyToken {
    /// Creates a symbolic token from a label compiled into the program.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::KeyToken;
    ///
    /// let token = KeyToken::sym("id");
    /// assert!(token.is_symbol());
    /// assert_eq!(token.to_string(), ":id");
    /// ```
    #[must_use]
    pub fn sym(name: &'static str) -> Self {
        KeyToken::Sym(Symbol::from_static(name))
    }

    #[inline]
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, KeyToken::Sym(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, KeyToken::Lit(_))
    }

    /// Returns the label text of string and symbol tokens.
    ///
    /// Raw string literals also return their text; numeric literals return `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            KeyToken::Str(s) => Some(s),
            KeyToken::Sym(sym) => Some(sym.as_str()),
            KeyToken::Lit(Literal::Raw(s)) => Some(s),
            KeyToken::Lit(_) => None,
        }
    }
}

/// Renders the token in dot-notation style: dots in string labels are
/// escaped and symbols get a `:` prefix.
///
/// The rendering is for messages and logs and does not always parse back to
/// the same token. A string label ending in `\` or starting with `:` is
/// ambiguous, and literals have no dot-notation form at all.
impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Str(s) => f.write_str(&s.replace('.', "\\.")),
            KeyToken::Sym(sym) => write!(f, ":{}", sym),
            KeyToken::Lit(lit) => write!(f, "{}", lit),
        }
    }
}

impl Serialize for KeyToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            KeyToken::Str(s) | KeyToken::Lit(Literal::Raw(s)) => serializer.serialize_str(s),
            KeyToken::Sym(sym) => serializer.serialize_str(sym.as_str()),
            KeyToken::Lit(Literal::Integer(i)) => serializer.serialize_i64(*i),
            KeyToken::Lit(Literal::Float(fl)) => serializer.serialize_f64(*fl),
        }
    }
}

impl From<&str> for KeyToken {
    fn from(value: &str) -> Self {
        KeyToken::Str(value.to_string())
    }
}

impl From<String> for KeyToken {
    fn from(value: String) -> Self {
        KeyToken::Str(value)
    }
}

impl From<Symbol> for KeyToken {
    fn from(value: Symbol) -> Self {
        KeyToken::Sym(value)
    }
}

impl From<Literal> for KeyToken {
    fn from(value: Literal) -> Self {
        KeyToken::Lit(value)
    }
}

impl From<i32> for KeyToken {
    fn from(value: i32) -> Self {
        KeyToken::Lit(Literal::Integer(value as i64))
    }
}

impl From<i64> for KeyToken {
    fn from(value: i64) -> Self {
        KeyToken::Lit(Literal::Integer(value))
    }
}

impl From<u32> for KeyToken {
    fn from(value: u32) -> Self {
        KeyToken::Lit(Literal::Integer(value as i64))
    }
}

impl From<f64> for KeyToken {
    fn from(value: f64) -> Self {
        KeyToken::Lit(Literal::Float(value))
    }
}
