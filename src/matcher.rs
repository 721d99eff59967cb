//! Rule lookup and per-level narrowing of a [`KeyPairs`] registry.
//!
//! The formatter walks a tree one map level at a time. At each level it asks
//! two questions of the registry that applies there:
//!
//! - what is the new name of this key? ([`find_key`], or [`find_match`] for a whole path)
//! - which rules apply below this key? ([`subset`])
//!
//! `subset` strips the consumed token from both sides of every rule that
//! starts with the key, so the registry handed to a child level always
//! addresses keys relative to that child. A rule that matches at depth *d*
//! has therefore been reached through ancestors that were renamed by the
//! same mapping.
//!
//! ```rust
//! use serde_rekey::{matcher, KeyPairs, KeyToken, SymbolTable};
//!
//! let pairs = KeyPairs::build([("user", "account"), ("user.name", "account.login")], &SymbolTable::new()).unwrap();
//!
//! assert_eq!(matcher::find_key(&pairs, &KeyToken::from("user")), KeyToken::from("account"));
//!
//! let below_user = matcher::subset(&pairs, &KeyToken::from("user"));
//! assert_eq!(below_user.len(), 1);
//! assert_eq!(matcher::find_key(&below_user, &KeyToken::from("name")), KeyToken::from("login"));
//! ```

use crate::pairs::KeyPair;
use crate::{KeyPairs, KeyPath, KeyToken};

/// Returns the destination of the first rule whose source equals `path`.
///
/// Unmapped paths come back unchanged, so a mapping never has to be exhaustive.
#[must_use]
pub fn find_match(pairs: &KeyPairs, path: &KeyPath) -> KeyPath {
    pairs
        .iter()
        .find(|pair| pair.source() == path)
        .map(|pair| pair.destination().clone())
        .unwrap_or_else(|| path.clone())
}

/// Returns the new name of `key` at the level `pairs` applies to.
///
/// Equivalent to the last token of `find_match(pairs, [key])`.
#[must_use]
pub fn find_key(pairs: &KeyPairs, key: &KeyToken) -> KeyToken {
    pairs
        .iter()
        // single-token rules sort first
        .take_while(|pair| pair.source().len() == 1)
        .find(|pair| pair.source().first() == key)
        .map(|pair| pair.destination().last().clone())
        .unwrap_or_else(|| key.clone())
}

/// Returns the rules that apply below `key`, advanced by one level.
///
/// Rules that do not start with `key` are dropped, as are rules that end at
/// `key` and have nothing left to say about its descendants.
#[must_use]
pub fn subset(pairs: &KeyPairs, key: &KeyToken) -> KeyPairs {
    let advanced = pairs
        .iter()
        .filter(|pair| pair.source().first() == key)
        .filter_map(|pair| {
            let source = pair.source().tail()?;
            let destination = pair.destination().tail()?;
            Some(KeyPair::from_parts_unchecked(source, destination))
        })
        .collect();

    // every length dropped by one, so the scan order still holds
    KeyPairs::from_sorted_unchecked(advanced)
}

impl KeyPairs {
    /// See [`find_match`].
    #[must_use]
    pub fn find_match(&self, path: &KeyPath) -> KeyPath {
        find_match(self, path)
    }

    /// See [`find_key`].
    #[must_use]
    pub fn find_key(&self, key: &KeyToken) -> KeyToken {
        find_key(self, key)
    }

    /// See [`subset`].
    #[must_use]
    pub fn subset(&self, key: &KeyToken) -> KeyPairs {
        subset(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTable;

    fn symbols() -> SymbolTable {
        SymbolTable::from_iter(["a", "b", "c"])
    }

    fn path(raw: &str) -> KeyPath {
        KeyPath::parse_or_panic(raw, &symbols())
    }

    #[test]
    fn test_find_match_exact() {
        let pairs = KeyPairs::build([("a", ":a"), ("a.b", ":a.:b")], &symbols()).unwrap();
        assert_eq!(find_match(&pairs, &path("a")), path(":a"));
        assert_eq!(find_match(&pairs, &path("a.b")), path(":a.:b"));
    }

    #[test]
    fn test_find_match_is_not_prefix_match() {
        let pairs = KeyPairs::build([("a.b", "x.y")], &symbols()).unwrap();
        assert_eq!(find_match(&pairs, &path("a")), path("a"));
        assert_eq!(find_match(&pairs, &path("a.b.c")), path("a.b.c"));
    }

    #[test]
    fn test_find_match_first_rule_wins() {
        let pairs = KeyPairs::build([("a", "x"), ("a", "y")], &symbols()).unwrap();
        assert_eq!(find_match(&pairs, &path("a")), path("x"));
        assert_eq!(find_key(&pairs, &KeyToken::from("a")), KeyToken::from("x"));
    }

    #[test]
    fn test_find_key_identity_fallback() {
        let pairs = KeyPairs::build([("a", ":a")], &symbols()).unwrap();
        assert_eq!(find_key(&pairs, &KeyToken::from("z")), KeyToken::from("z"));
        assert_eq!(find_key(&pairs, &KeyToken::sym("a")), KeyToken::sym("a"));
    }

    #[test]
    fn test_find_key_ignores_deeper_rules() {
        let pairs = KeyPairs::build([("a.b", "x.y")], &symbols()).unwrap();
        assert_eq!(find_key(&pairs, &KeyToken::from("a")), KeyToken::from("a"));
    }

    #[test]
    fn test_subset_advances_rules() {
        let pairs = KeyPairs::build(
            [("a", "x"), ("a.b", "x.y"), ("a.b.c", "x.y.z"), ("b.c", "q.r")],
            &symbols(),
        )
        .unwrap();
        let below_a = subset(&pairs, &KeyToken::from("a"));
        let rendered: Vec<String> = below_a.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["(b, y)", "(b.c, y.z)"]);

        let below_ab = subset(&below_a, &KeyToken::from("b"));
        let rendered: Vec<String> = below_ab.iter().map(|p| p.to_string()).collect();
        assert_eq!(rendered, vec!["(c, z)"]);
    }

    #[test]
    fn test_subset_of_unmatched_key_is_empty() {
        let pairs = KeyPairs::build([("a.b", "x.y")], &symbols()).unwrap();
        assert!(subset(&pairs, &KeyToken::from("z")).is_empty());
        assert!(subset(&pairs, &KeyToken::sym("a")).is_empty());
    }

    #[test]
    fn test_subset_leaves_registry_untouched() {
        let pairs = KeyPairs::build([("a.b", "x.y")], &symbols()).unwrap();
        let before = pairs.clone();
        let _ = pairs.subset(&KeyToken::from("a"));
        assert_eq!(pairs, before);
    }
}
