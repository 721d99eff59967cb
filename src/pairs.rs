//! Key pairs and the validated, sorted [`KeyPairs`] registry.
//!
//! A [`KeyPair`] maps a source path to a destination path of the same depth.
//! [`KeyPairs`] holds every pair of a mapping, sorted by ascending source
//! length with ties kept in input order, which fixes the order in which the
//! [matcher](crate::matcher) scans them.
//!
//! ## Building a Registry
//!
//! ```rust
//! use serde_rekey::{KeyPairs, SymbolTable};
//!
//! let symbols = SymbolTable::from_iter(["a", "b"]);
//! let pairs = KeyPairs::build([("a.b", ":a.:b"), ("a", ":a")], &symbols).unwrap();
//!
//! // Shorter rules sort first
//! assert_eq!(pairs.as_slice()[0].source().len(), 1);
//!
//! // The inverse mapping without redeclaring it
//! let inverse = pairs.reverse();
//! assert_eq!(inverse.len(), 2);
//! ```

use crate::{Error, KeyPath, RawPath, Result, SymbolTable, Value};
use std::fmt;

/// A rule renaming `source` to `destination`. Both paths have the same length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPair {
    source: KeyPath,
    destination: KeyPath,
}

impl KeyPair {
    /// Creates a pair from parsed paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPairs`] (at index 0) when the paths differ in length.
    pub fn new(source: KeyPath, destination: KeyPath) -> Result<Self> {
        let pair = KeyPair {
            source,
            destination,
        };
        pair.validate(0)?;
        Ok(pair)
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> &KeyPath {
        &self.source
    }

    #[inline]
    #[must_use]
    pub fn destination(&self) -> &KeyPath {
        &self.destination
    }

    /// Returns the pair with source and destination swapped.
    #[must_use]
    pub fn reversed(&self) -> KeyPair {
        KeyPair {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (KeyPath, KeyPath) {
        (self.source, self.destination)
    }

    pub(crate) fn from_parts_unchecked(source: KeyPath, destination: KeyPath) -> Self {
        KeyPair {
            source,
            destination,
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.source.len() != self.destination.len() {
            return Err(Error::invalid_key_pairs(
                index,
                self,
                self.source.len(),
                self.destination.len(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.destination)
    }
}

/// An unparsed `(source, destination)` mapping entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPair {
    pub source: RawPath,
    pub destination: RawPath,
}

impl RawPair {
    pub fn new<S: Into<RawPath>, D: Into<RawPath>>(source: S, destination: D) -> Self {
        RawPair {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

impl<S: Into<RawPath>, D: Into<RawPath>> From<(S, D)> for RawPair {
    fn from((source, destination): (S, D)) -> Self {
        RawPair::new(source, destination)
    }
}

/// The validated rule set of a mapping, sorted by ascending source length.
///
/// A registry is immutable. Operations that narrow or invert it, such as
/// [`subset`](crate::matcher::subset) and [`KeyPairs::reverse`], return a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyPairs(Vec<KeyPair>);

impl KeyPairs {
    /// Creates an empty registry. Formatting with it renames nothing.
    #[must_use]
    pub fn empty() -> Self {
        KeyPairs(Vec::new())
    }

    /// Validates and sorts already-parsed pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPairs`] for the first pair whose sides differ in length.
    pub fn new(pairs: Vec<KeyPair>) -> Result<Self> {
        for (index, pair) in pairs.iter().enumerate() {
            pair.validate(index)?;
        }
        Ok(Self::sorted(pairs))
    }

    /// Parses, validates and sorts raw pairs.
    ///
    /// Parsing is fail-fast: the first invalid path aborts the build and no
    /// partial registry is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::{KeyPairs, SymbolTable};
    ///
    /// let symbols = SymbolTable::from_iter(["a", "b"]);
    /// let err = KeyPairs::build([("a", ":a.:b")], &symbols).unwrap_err();
    /// assert!(err.is_invalid_key_pairs());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyPath`] for the first side that does not parse,
    /// or [`Error::InvalidKeyPairs`] for the first pair of unequal depth.
    pub fn build<I, P>(raw_pairs: I, symbols: &SymbolTable) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPair>,
    {
        let pairs = raw_pairs
            .into_iter()
            .enumerate()
            .map(|(index, raw)| -> Result<KeyPair> {
                let raw: RawPair = raw.into();
                let pair = KeyPair {
                    source: KeyPath::parse(raw.source, symbols)?,
                    destination: KeyPath::parse(raw.destination, symbols)?,
                };
                pair.validate(index)?;
                Ok(pair)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(pairs = pairs.len(), "built key pairs registry");
        Ok(Self::sorted(pairs))
    }

    /// Panicking variant of [`KeyPairs::build`] for mappings known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with the error message, which names the offending pair and its index.
    #[must_use]
    pub fn build_or_panic<I, P>(raw_pairs: I, symbols: &SymbolTable) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPair>,
    {
        Self::build(raw_pairs, symbols).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Builds a registry from an untyped value, typically loaded from configuration.
    ///
    /// Two layouts are accepted:
    ///
    /// - an array of two-element arrays: `[["a", ":a"], ["a.b", ":a.:b"]]`
    /// - an object mapping source paths to destination paths: `{"a": ":a"}`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::{tree, KeyPairs, SymbolTable};
    ///
    /// let config = tree!([["user.name", "user.full_name"], ["user", "account"]]);
    /// let pairs = KeyPairs::from_value(&config, &SymbolTable::new()).unwrap();
    /// assert_eq!(pairs.len(), 2);
    ///
    /// let err = KeyPairs::from_value(&tree!(["a"]), &SymbolTable::new()).unwrap_err();
    /// assert!(err.is_invalid_pair());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPair`] for an entry that is not a pair,
    /// and the errors of [`KeyPairs::build`] otherwise.
    pub fn from_value(value: &Value, symbols: &SymbolTable) -> Result<Self> {
        let raw_pairs = match value {
            Value::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| -> Result<RawPair> {
                    match entry {
                        Value::Array(sides) if sides.len() == 2 => Ok(RawPair {
                            source: RawPath::from_value(&sides[0])?,
                            destination: RawPath::from_value(&sides[1])?,
                        }),
                        other => Err(Error::invalid_pair(index, other)),
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            Value::Object(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, (key, destination))| -> Result<RawPair> {
                    let source = match key.as_str() {
                        Some(s) => RawPath::Dotted(s.to_string()),
                        None => RawPath::Tokens(vec![key.clone()]),
                    };
                    match destination {
                        Value::String(_) | Value::Array(_) => Ok(RawPair {
                            source,
                            destination: RawPath::from_value(destination)?,
                        }),
                        other => Err(Error::invalid_pair(index, other)),
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(Error::custom(format!(
                    "expected a mapping as an array of pairs or an object, found {}",
                    other.type_name()
                )))
            }
        };
        Self::build(raw_pairs, symbols)
    }

    /// Returns the inverse mapping, with every pair's source and destination swapped.
    ///
    /// Formatting with `pairs` and then with `pairs.reverse()` restores the
    /// original keys when the mapping is injective at every level.
    #[must_use]
    pub fn reverse(&self) -> KeyPairs {
        tracing::debug!(pairs = self.0.len(), "reversed key pairs registry");
        Self::sorted(self.0.iter().map(KeyPair::reversed).collect())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyPair> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[KeyPair] {
        &self.0
    }

    /// Wraps pairs that are already valid and in scan order.
    pub(crate) fn from_sorted_unchecked(pairs: Vec<KeyPair>) -> Self {
        KeyPairs(pairs)
    }

    fn sorted(mut pairs: Vec<KeyPair>) -> Self {
        // sort_by_key is stable, ties keep input order
        pairs.sort_by_key(|pair| pair.source.len());
        KeyPairs(pairs)
    }
}

impl<'a> IntoIterator for &'a KeyPairs {
    type Item = &'a KeyPair;
    type IntoIter = std::slice::Iter<'a, KeyPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KeyPairs {
    type Item = KeyPair;
    type IntoIter = std::vec::IntoIter<KeyPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
