//! The recursive formatter that renames keys throughout a [`Value`] tree.
//!
//! ## Traversal
//!
//! - **Object**: every entry is handled on its own. The key is renamed with
//!   [`find_key`](crate::matcher::find_key) against the rules of the current
//!   level, and the child is formatted with the rules
//!   [`subset`](crate::matcher::subset) to that key.
//! - **Array**: every element is formatted with the same rules. Arrays do not
//!   consume a path segment, but each array level still counts toward
//!   [`RekeyOptions::max_depth`].
//! - **Anything else**: returned unchanged.
//!
//! A subtree with no applicable rules is moved into the output as is,
//! without being walked.
//!
//! ## Mappings
//!
//! The `mapping` argument accepts raw pairs, which are parsed and validated
//! on every call, or a prebuilt [`KeyPairs`] by reference, which skips
//! validation and is the way to apply one mapping repeatedly.
//!
//! ```rust
//! use serde_rekey::{format, tree, KeyPairs, SymbolTable};
//!
//! let pairs = KeyPairs::build([("user", "account"), ("user.mail", "account.email")], &SymbolTable::new()).unwrap();
//!
//! let renamed = format(tree!([{"user": {"mail": "a@x"}}, {"user": {"mail": "b@x"}}]), &pairs).unwrap();
//! assert_eq!(
//!     renamed,
//!     tree!([{"account": {"email": "a@x"}}, {"account": {"email": "b@x"}}])
//! );
//! ```

use crate::pairs::RawPair;
use crate::{
    from_value, to_value, Error, KeyMap, KeyPairs, KeyToken, RekeyOptions, Result, SymbolTable,
    Value,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;

/// Anything that can supply the [`KeyPairs`] registry for a formatting call.
pub trait IntoKeyPairs<'a> {
    /// Produces the registry, parsing and validating raw input as needed.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`KeyPairs::build`] for raw input.
    fn into_key_pairs(self, symbols: &SymbolTable) -> Result<Cow<'a, KeyPairs>>;
}

impl<'a> IntoKeyPairs<'a> for &'a KeyPairs {
    fn into_key_pairs(self, _symbols: &SymbolTable) -> Result<Cow<'a, KeyPairs>> {
        Ok(Cow::Borrowed(self))
    }
}

impl IntoKeyPairs<'static> for KeyPairs {
    fn into_key_pairs(self, _symbols: &SymbolTable) -> Result<Cow<'static, KeyPairs>> {
        Ok(Cow::Owned(self))
    }
}

impl<P> IntoKeyPairs<'static> for Vec<P>
where
    P: Into<RawPair>,
{
    fn into_key_pairs(self, symbols: &SymbolTable) -> Result<Cow<'static, KeyPairs>> {
        KeyPairs::build(self, symbols).map(Cow::Owned)
    }
}

impl<P, const N: usize> IntoKeyPairs<'static> for [P; N]
where
    P: Into<RawPair>,
{
    fn into_key_pairs(self, symbols: &SymbolTable) -> Result<Cow<'static, KeyPairs>> {
        KeyPairs::build(self, symbols).map(Cow::Owned)
    }
}

impl<'s, P> IntoKeyPairs<'static> for &'s [P]
where
    P: Into<RawPair> + Clone,
{
    fn into_key_pairs(self, symbols: &SymbolTable) -> Result<Cow<'static, KeyPairs>> {
        KeyPairs::build(self.iter().cloned(), symbols).map(Cow::Owned)
    }
}

/// Renames the keys of `value` according to `mapping`, with default options.
///
/// # Examples
///
/// ```rust
/// use serde_rekey::{format, tree};
///
/// let renamed = format(tree!({"a": "b", "z": 1}), [("a", "x")]).unwrap();
/// assert_eq!(renamed, tree!({"x": "b", "z": 1}));
/// ```
///
/// # Errors
///
/// Returns a mapping error before any traversal when raw pairs are invalid,
/// or [`Error::DepthLimitExceeded`] for trees nested deeper than
/// [`DEFAULT_MAX_DEPTH`](crate::options::DEFAULT_MAX_DEPTH).
pub fn format<'a, M>(value: Value, mapping: M) -> Result<Value>
where
    M: IntoKeyPairs<'a>,
{
    format_with_options(value, mapping, &RekeyOptions::default())
}

/// Renames the keys of `value` according to `mapping` and `options`.
///
/// # Errors
///
/// See [`format`].
pub fn format_with_options<'a, M>(value: Value, mapping: M, options: &RekeyOptions) -> Result<Value>
where
    M: IntoKeyPairs<'a>,
{
    let pairs = mapping.into_key_pairs(&options.symbols)?;
    walk(value, &pairs, 0, options.max_depth)
}

/// Panicking variant of [`format`] for mappings known to be valid.
///
/// # Panics
///
/// Panics with the error message when the mapping is invalid or the depth
/// limit is exceeded.
#[must_use]
pub fn format_or_panic<'a, M>(value: Value, mapping: M) -> Value
where
    M: IntoKeyPairs<'a>,
{
    format(value, mapping).unwrap_or_else(|err| panic!("{}", err))
}

/// Normalizes a record into a [`Value`] and renames its keys.
///
/// Struct fields become symbolic keys, so mappings address them with `:name`
/// segments registered in `options.symbols`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_rekey::{rekey, tree, RekeyOptions};
///
/// #[derive(Serialize)]
/// struct Row { a: &'static str, b: &'static str }
///
/// let options = RekeyOptions::new().with_symbol("a").with_symbol("b");
/// let value = rekey(&Row { a: "x", b: "y" }, [(":a", "a"), (":b", "b")], &options).unwrap();
/// assert_eq!(value, tree!({"a": "x", "b": "y"}));
/// ```
///
/// # Errors
///
/// Returns an error if the record cannot be converted or formatting fails.
pub fn rekey<'a, T, M>(record: &T, mapping: M, options: &RekeyOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
    M: IntoKeyPairs<'a>,
{
    format_with_options(to_value(record)?, mapping, options)
}

/// Renames the keys of a record and deserializes the result into another type.
///
/// # Errors
///
/// Returns an error if conversion, formatting or deserialization fails.
pub fn rekey_into<'a, T, U, M>(record: &T, mapping: M, options: &RekeyOptions) -> Result<U>
where
    T: ?Sized + Serialize,
    U: DeserializeOwned,
    M: IntoKeyPairs<'a>,
{
    from_value(rekey(record, mapping, options)?)
}

fn walk(value: Value, pairs: &KeyPairs, depth: usize, max_depth: Option<usize>) -> Result<Value> {
    if pairs.is_empty() || value.is_scalar() {
        return Ok(value);
    }
    if let Some(limit) = max_depth {
        if depth >= limit {
            return Err(Error::depth_limit_exceeded(limit));
        }
    }

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| walk(item, pairs, depth + 1, max_depth))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, child)| -> Result<(KeyToken, Value)> {
                let renamed = pairs.find_key(&key);
                let child = walk(child, &pairs.subset(&key), depth + 1, max_depth)?;
                if renamed != key {
                    tracing::trace!(from = %key, to = %renamed, depth, "renamed key");
                }
                Ok((renamed, child))
            })
            .collect::<Result<KeyMap>>()
            .map(Value::Object),
        scalar => Ok(scalar),
    }
}
