//! Key paths and the dot-notation parser.
//!
//! A [`KeyPath`] is a non-empty sequence of [`KeyToken`]s describing how to
//! descend from the root of a tree to a nested key. Paths are written either
//! in dot notation or as an explicit token list, both captured by [`RawPath`].
//!
//! ## Dot Notation
//!
//! | Input | Tokens |
//! |-------|--------|
//! | `"a.b"` | `Str("a")`, `Str("b")` |
//! | `"a.:b.c"` | `Str("a")`, `Sym("b")`, `Str("c")` |
//! | `"a\\.b.c"` | `Str("a.b")`, `Str("c")` |
//! | `"a..b"` | `Str("a")`, `Str("")`, `Str("b")` |
//!
//! - Segments are separated by `.`; `\.` is a literal dot inside a segment.
//!   A backslash before any other character is kept as is.
//! - A segment starting with `:` names a symbol, which must be registered in
//!   the [`SymbolTable`] passed to the parser.
//! - The empty string is not a path.
//!
//! Keys that dot notation cannot spell, such as integers, are given as an
//! explicit token list:
//!
//! ```rust
//! use serde_rekey::{KeyPath, KeyToken, SymbolTable};
//!
//! let path = KeyPath::parse(vec![KeyToken::from("rows"), KeyToken::from(0)], &SymbolTable::new()).unwrap();
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.last(), &KeyToken::from(0));
//! ```

use crate::{Error, KeyToken, Literal, Number, Result, SymbolTable, Value};
use std::fmt;

const SEPARATOR: char = '.';
const ESCAPE: char = '\\';
const SYMBOL_PREFIX: char = ':';

/// An unparsed path specification.
#[derive(Clone, Debug, PartialEq)]
pub enum RawPath {
    /// Dot-notation string, e.g. `"user.:id"`.
    Dotted(String),
    /// Explicit token list, returned verbatim by the parser when non-empty.
    Tokens(Vec<KeyToken>),
}

impl RawPath {
    /// Classifies an untyped value, typically one read from a configuration file.
    ///
    /// Strings become [`RawPath::Dotted`]. Arrays of strings and numbers become
    /// [`RawPath::Tokens`], where strings are string labels and numbers are
    /// literal keys. Everything else is an invalid key path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::{RawPath, Value};
    ///
    /// assert!(RawPath::from_value(&Value::from("a.b")).is_ok());
    /// assert!(RawPath::from_value(&Value::Null).is_err());
    /// assert!(RawPath::from_value(&Value::from(1)).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPath`] when the value is not a string or a
    /// flat array of strings and numbers.
    pub fn from_value(value: &Value) -> Result<RawPath> {
        match value {
            Value::String(s) => Ok(RawPath::Dotted(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(KeyToken::Str(s.clone())),
                    Value::Number(Number::Integer(i)) => Ok(KeyToken::Lit(Literal::Integer(*i))),
                    Value::Number(Number::Float(f)) => Ok(KeyToken::Lit(Literal::Float(*f))),
                    other => Err(Error::invalid_key_path(
                        value,
                        format!("{} is not a key token", other.type_name()),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(RawPath::Tokens),
            other => Err(Error::invalid_key_path(
                other,
                format!("expected a string or a token list, found {}", other.type_name()),
            )),
        }
    }
}

impl fmt::Display for RawPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPath::Dotted(s) => write!(f, "{:?}", s),
            RawPath::Tokens(tokens) => {
                write!(f, "[")?;
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", token)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for RawPath {
    fn from(value: &str) -> Self {
        RawPath::Dotted(value.to_string())
    }
}

impl From<String> for RawPath {
    fn from(value: String) -> Self {
        RawPath::Dotted(value)
    }
}

impl From<&String> for RawPath {
    fn from(value: &String) -> Self {
        RawPath::Dotted(value.clone())
    }
}

impl From<Vec<KeyToken>> for RawPath {
    fn from(value: Vec<KeyToken>) -> Self {
        RawPath::Tokens(value)
    }
}

impl From<&[KeyToken]> for RawPath {
    fn from(value: &[KeyToken]) -> Self {
        RawPath::Tokens(value.to_vec())
    }
}

impl<const N: usize> From<[KeyToken; N]> for RawPath {
    fn from(value: [KeyToken; N]) -> Self {
        RawPath::Tokens(value.into())
    }
}

impl From<KeyPath> for RawPath {
    fn from(value: KeyPath) -> Self {
        RawPath::Tokens(value.0)
    }
}

/// A parsed, non-empty key path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<KeyToken>);

#[allow(clippy::len_without_is_empty)]
impl KeyPath {
    /// Creates a path from tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPath`] when `tokens` is empty.
    pub fn new(tokens: Vec<KeyToken>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(Error::invalid_key_path("[]", "path has no tokens"));
        }
        Ok(KeyPath(tokens))
    }

    /// Parses a raw path specification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::{KeyPath, KeyToken, SymbolTable};
    ///
    /// let symbols = SymbolTable::new().with("b");
    /// let path = KeyPath::parse("a.:b.c", &symbols).unwrap();
    /// assert_eq!(
    ///     path.tokens(),
    ///     &[KeyToken::from("a"), KeyToken::sym("b"), KeyToken::from("c")]
    /// );
    ///
    /// let path = KeyPath::parse("a\\.b.c", &symbols).unwrap();
    /// assert_eq!(path.tokens(), &[KeyToken::from("a.b"), KeyToken::from("c")]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPath`] for an empty string, an empty token
    /// list, or a `:name` segment whose name is not in `symbols`.
    pub fn parse<R: Into<RawPath>>(raw: R, symbols: &SymbolTable) -> Result<KeyPath> {
        match raw.into() {
            RawPath::Tokens(tokens) => KeyPath::new(tokens),
            RawPath::Dotted(s) => parse_dotted(&s, symbols),
        }
    }

    /// Parses a raw path specification, panicking on invalid input.
    ///
    /// Intended for paths that are known to be valid, such as literals in code.
    ///
    /// # Panics
    ///
    /// Panics with the parse error message if the path is invalid.
    #[must_use]
    pub fn parse_or_panic<R: Into<RawPath>>(raw: R, symbols: &SymbolTable) -> KeyPath {
        KeyPath::parse(raw, symbols).unwrap_or_else(|err| panic!("{}", err))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[KeyToken] {
        &self.0
    }

    #[must_use]
    pub fn first(&self) -> &KeyToken {
        &self.0[0]
    }

    #[must_use]
    pub fn last(&self) -> &KeyToken {
        &self.0[self.0.len() - 1]
    }

    /// Returns the path without its first token, or `None` for a single-token path.
    #[must_use]
    pub fn tail(&self) -> Option<KeyPath> {
        if self.0.len() > 1 {
            Some(KeyPath(self.0[1..].to_vec()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<KeyToken> {
        self.0
    }
}

impl From<KeyToken> for KeyPath {
    fn from(token: KeyToken) -> Self {
        KeyPath(vec![token])
    }
}

/// Joins the tokens' [`Display`](fmt::Display) forms with `.`.
///
/// With the same symbol table, a path of string labels and symbols parses
/// back to itself. Exceptions are string labels that end in `\` or start
/// with `:`, symbol names containing `.`, and literals; build such paths
/// from token lists instead.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

fn parse_dotted(s: &str, symbols: &SymbolTable) -> Result<KeyPath> {
    if s.is_empty() {
        return Err(Error::invalid_key_path("\"\"", "path is empty"));
    }

    split_segments(s)
        .into_iter()
        .map(|segment| classify_segment(s, segment, symbols))
        .collect::<Result<Vec<_>>>()
        .map(KeyPath)
}

/// Splits on unescaped separators, unescaping `\.` along the way.
fn split_segments(s: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&SEPARATOR) => {
                current.push(SEPARATOR);
                chars.next();
            }
            SEPARATOR => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

fn classify_segment(raw: &str, segment: String, symbols: &SymbolTable) -> Result<KeyToken> {
    match segment.strip_prefix(SYMBOL_PREFIX) {
        Some(name) => symbols
            .get(name)
            .cloned()
            .map(KeyToken::Sym)
            .ok_or_else(|| {
                Error::invalid_key_path(
                    format!("{:?}", raw),
                    format!("unknown symbol :{}", name),
                )
            }),
        None => Ok(KeyToken::Str(segment)),
    }
}
