//! # serde_rekey
//!
//! Declarative key renaming for deeply nested, already-deserialized data.
//!
//! ## What does it do?
//!
//! Data arriving from the outside world rarely has the shape your program
//! wants. `serde_rekey` takes a generic value tree (maps, lists and scalars)
//! and a mapping of source key-paths to destination key-paths, and returns
//! the same tree with its map keys renamed. Nothing else changes: no values
//! are computed, filtered or coerced, and the shape of the tree is preserved.
//!
//! ## Key Features
//!
//! - **Dot-notation paths**: `"user.address.zip"`, with `\.` for literal dots
//!   and `:name` for symbolic keys
//! - **Partial mappings**: keys without a rule pass through unchanged
//! - **Lists are transparent**: rules apply to every element of a list
//! - **Records**: any `T: Serialize` is normalized into a map of its fields
//! - **Precompiled mappings**: validate once with [`KeyPairs::build`], apply many times
//! - **Fail-fast validation**: malformed mappings are rejected before any tree is walked
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_rekey::{format, tree, Value};
//!
//! let payload: Value = serde_json::from_str(
//!     r#"{"usr": {"nm": "Alice", "tags": [{"k": "role"}]}, "v": 2}"#,
//! ).unwrap();
//!
//! let renamed = format(
//!     payload,
//!     [("usr", "user"), ("usr.nm", "user.name"), ("usr.tags.k", "user.tags.key")],
//! ).unwrap();
//!
//! assert_eq!(
//!     renamed,
//!     tree!({"user": {"name": "Alice", "tags": [{"key": "role"}]}, "v": 2})
//! );
//! ```
//!
//! ### Symbolic Keys and Records
//!
//! Struct field names become symbolic keys. Mappings address them with
//! `:name` segments, which only parse when the name is registered in the
//! [`SymbolTable`] of the [`RekeyOptions`].
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_rekey::{rekey_into, RekeyOptions};
//!
//! #[derive(Serialize)]
//! struct Wire { usr_nm: String }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct User { name: String }
//!
//! let options = RekeyOptions::new().with_symbol("usr_nm").with_symbol("name");
//! let user: User = rekey_into(
//!     &Wire { usr_nm: "Alice".to_string() },
//!     [(":usr_nm", ":name")],
//!     &options,
//! ).unwrap();
//! assert_eq!(user, User { name: "Alice".to_string() });
//! ```
//!
//! ### Reusing a Mapping
//!
//! ```rust
//! use serde_rekey::{format, tree, KeyPairs, SymbolTable};
//!
//! let pairs = KeyPairs::build([("id", "uid")], &SymbolTable::new()).unwrap();
//! let inverse = pairs.reverse();
//!
//! let there = format(tree!({"id": 1}), &pairs).unwrap();
//! let back = format(there, &inverse).unwrap();
//! assert_eq!(back, tree!({"id": 1}));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No shared mutable state: registries and paths are immutable, so one
//!   registry can serve many threads at once
//! - Recursion is bounded by [`RekeyOptions::max_depth`]

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod matcher;
pub mod options;
pub mod pairs;
pub mod path;
pub mod ser;
pub mod symbols;
pub mod token;
pub mod value;

pub use de::from_value;
pub use error::{Error, Result};
pub use format::{format, format_or_panic, format_with_options, rekey, rekey_into, IntoKeyPairs};
pub use map::KeyMap;
pub use options::RekeyOptions;
pub use pairs::{KeyPair, KeyPairs, RawPair};
pub use path::{KeyPath, RawPath};
pub use ser::{to_value, ValueSerializer};
pub use symbols::SymbolTable;
pub use token::{KeyToken, Literal, Symbol};
pub use value::{Number, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize)]
    struct Record {
        a: &'static str,
        b: &'static str,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Renamed {
        alpha: String,
        beta: String,
    }

    #[test]
    fn test_record_formats_like_equivalent_map() {
        let options = RekeyOptions::new().with_symbol("a").with_symbol("b");
        let mapping = [(":a", "a"), (":b", "b")];

        let from_record = rekey(&Record { a: "x", b: "y" }, mapping, &options).unwrap();
        let from_map = format_with_options(tree!({"a": "x", "b": "y"}), mapping, &options).unwrap();

        assert_eq!(from_record, from_map);
        assert_eq!(from_record, tree!({"a": "x", "b": "y"}));
    }

    #[test]
    fn test_rekey_into_target_type() {
        let options = RekeyOptions::new()
            .with_symbols(SymbolTable::from_iter(["a", "b", "alpha", "beta"]));
        let renamed: Renamed = rekey_into(
            &Record { a: "x", b: "y" },
            [(":a", ":alpha"), (":b", ":beta")],
            &options,
        )
        .unwrap();
        assert_eq!(
            renamed,
            Renamed {
                alpha: "x".to_string(),
                beta: "y".to_string()
            }
        );
    }

    #[test]
    fn test_round_trip_through_reverse() {
        let pairs = KeyPairs::build(
            [("a", "x"), ("a.b", "x.y"), ("c", "z")],
            &SymbolTable::new(),
        )
        .unwrap();
        let source = tree!([{"a": {"b": 1, "k": 2}, "c": [true]}, {"q": null}]);
        let there = format(source.clone(), &pairs).unwrap();
        assert_eq!(
            there,
            tree!([{"x": {"y": 1, "k": 2}, "z": [true]}, {"q": null}])
        );
        assert_eq!(format(there, &pairs.reverse()).unwrap(), source);
    }
}
