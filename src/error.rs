//! Error types for key-path parsing, mapping construction and formatting.
//!
//! Every error in this module describes a problem with caller input. Mapping
//! errors are detected while the [`KeyPairs`](crate::KeyPairs) registry is
//! built, before any tree is walked, so a formatter never fails half way
//! through a mapping problem.
//!
//! ## Error Categories
//!
//! - **Invalid key paths**: an empty string, an empty token list, an unknown
//!   symbol or a value that is not a path at all
//! - **Invalid pairs**: a raw mapping entry that is not a `(source, destination)` pair
//! - **Invalid key pairs**: a pair whose two sides have different depths
//! - **Depth limit**: the input tree nests deeper than the configured bound
//!
//! ## Examples
//!
//! ```rust
//! use serde_rekey::{KeyPairs, SymbolTable};
//!
//! let err = KeyPairs::build([("a", "b.c")], &SymbolTable::new()).unwrap_err();
//! assert_eq!(err.kind(), "invalid_key_pairs");
//! assert!(err.to_string().contains("index 0"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building or applying a key mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A single path specification could not be parsed
    #[error("Invalid key path {raw}: {reason}")]
    InvalidKeyPath { raw: String, reason: String },

    /// A raw mapping entry was not a (source, destination) pair
    #[error("Invalid pair at index {index}: expected a (source, destination) pair, found {raw}")]
    InvalidPair { index: usize, raw: String },

    /// Source and destination paths of a pair have different lengths
    #[error("Invalid key pairs: pair at index {index} {pair} maps a path of length {source_len} to a path of length {destination_len}")]
    InvalidKeyPairs {
        index: usize,
        pair: String,
        source_len: usize,
        destination_len: usize,
    },

    /// The tree being formatted nests deeper than the configured limit
    #[error("Depth limit exceeded: value nests deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid key path error for the offending raw input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rekey::Error;
    ///
    /// let err = Error::invalid_key_path("\"\"", "path is empty");
    /// assert!(err.is_invalid_key_path());
    /// assert!(err.to_string().contains("path is empty"));
    /// ```
    pub fn invalid_key_path<R: fmt::Display, M: fmt::Display>(raw: R, reason: M) -> Self {
        Error::InvalidKeyPath {
            raw: raw.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid pair error for the mapping entry at `index`.
    pub fn invalid_pair<R: fmt::Display>(index: usize, raw: R) -> Self {
        Error::InvalidPair {
            index,
            raw: raw.to_string(),
        }
    }

    /// Creates an invalid key pairs error for a pair whose sides differ in length.
    pub fn invalid_key_pairs<P: fmt::Display>(
        index: usize,
        pair: P,
        source_len: usize,
        destination_len: usize,
    ) -> Self {
        Error::InvalidKeyPairs {
            index,
            pair: pair.to_string(),
            source_len,
            destination_len,
        }
    }

    /// Creates a depth limit error.
    pub fn depth_limit_exceeded(limit: usize) -> Self {
        Error::DepthLimitExceeded { limit }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the host-facing name of this error kind.
    ///
    /// Mapping errors report `invalid_key_path`, `invalid_pair` or
    /// `invalid_key_pairs`; hosts should treat all three as configuration
    /// errors rather than retryable faults.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Error::InvalidKeyPath { .. } => "invalid_key_path",
            Error::InvalidPair { .. } => "invalid_pair",
            Error::InvalidKeyPairs { .. } => "invalid_key_pairs",
            Error::DepthLimitExceeded { .. } => "depth_limit_exceeded",
            Error::Custom(_) => "custom",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid_key_path(&self) -> bool {
        matches!(self, Error::InvalidKeyPath { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid_pair(&self) -> bool {
        matches!(self, Error::InvalidPair { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid_key_pairs(&self) -> bool {
        matches!(self, Error::InvalidKeyPairs { .. })
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
