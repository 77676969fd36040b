//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which allows for efficient
//! access to the subtrie holding every key that starts with a given prefix.

use std::fmt;

use crate::iter::{Iter, Keys};
use crate::key::{KeySymbols, TrieKey};
use crate::node::TrieNode;
use crate::Trie;

/// A lightweight view into a subtrie defined by a key prefix.
///
/// The view borrows the trie and locates the subtrie node once, so lookups through
/// the view only walk the part of the key below the prefix.
///
/// # Examples
///
/// ```
/// use trie_st::Trie;
///
/// let trie: Trie<String, i32> = vec![("hello", 1), ("help", 2), ("world", 3)]
///     .into_iter()
///     .collect();
///
/// let view = trie.view_subtrie("hel");
///
/// assert!(view.contains_key("hello"));
/// assert!(!view.contains_key("world"));
/// assert_eq!(view.keys().collect::<Vec<_>>(), vec!["hello", "help"]);
/// ```
pub struct PrefixView<'a, K, V> {
    /// The source trie for this view
    trie: &'a Trie<K, V>,

    /// The symbols of the prefix defining this view
    prefix: Vec<u8>,

    /// The subtrie node at the prefix, if it exists
    subtrie_node: Option<&'a TrieNode<V>>,
}

impl<'a, K: TrieKey, V> PrefixView<'a, K, V> {
    /// Creates a new prefix view for the given trie and prefix.
    ///
    /// A prefix that cannot be encoded yields a view that does not exist.
    pub(crate) fn new<Q>(trie: &'a Trie<K, V>, prefix: &Q) -> Self
    where
        Q: KeySymbols + ?Sized,
    {
        match prefix.symbols() {
            Ok(symbols) => PrefixView {
                trie,
                subtrie_node: trie.root.descend(&symbols),
                prefix: symbols.into_owned(),
            },
            Err(_) => PrefixView {
                trie,
                prefix: prefix.leading_symbols().into_owned(),
                subtrie_node: None,
            },
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> K {
        K::from_symbols(&self.prefix)
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie<K, V> {
        self.trie
    }

    /// Returns whether the prefix exists in the trie.
    ///
    /// The empty prefix always exists, even in an empty trie. Any other existing
    /// prefix has at least one key below it.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of entries in this subtrie view.
    ///
    /// Unlike [`Trie::len`], this counts by walking the subtrie.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view is empty (contains no entries).
    pub fn is_empty(&self) -> bool {
        self.subtrie_node.map_or(true, TrieNode::is_prunable)
    }

    /// Checks if the view contains a key.
    ///
    /// Only returns true if the key is in the trie and starts with the prefix.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: KeySymbols + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Gets the value for a key if it exists in this prefix view.
    pub fn get<Q>(&self, key: &Q) -> Option<&'a V>
    where
        Q: KeySymbols + ?Sized,
    {
        let symbols = key.symbols().ok()?;
        let suffix = symbols.strip_prefix(self.prefix.as_slice())?;
        self.subtrie_node?.descend(suffix)?.value.as_ref()
    }

    /// Returns an iterator over the key-value pairs in the prefix view, in
    /// ascending key order.
    pub fn iter(&self) -> Iter<'a, K, V> {
        Iter::new(self.subtrie_node, self.prefix.clone())
    }

    /// Returns an iterator over the keys in the prefix view, in ascending order.
    pub fn keys(&self) -> Keys<'a, K, V> {
        Keys::new(self.iter())
    }
}

impl<'a, K, V> Clone for PrefixView<'a, K, V> {
    fn clone(&self) -> Self {
        PrefixView {
            trie: self.trie,
            prefix: self.prefix.clone(),
            subtrie_node: self.subtrie_node,
        }
    }
}

impl<'a, K, V> fmt::Debug for PrefixView<'a, K, V>
where
    K: TrieKey + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix())
            .field("entries", &self.len())
            .finish()
    }
}

/// Two views are equal when their subtries hold the same key suffixes with equal
/// values, whatever the prefixes or tries they come from.
impl<'a, K, V: PartialEq> PartialEq for PrefixView<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            _ => false,
        }
    }
}

impl<'a, K, V: Eq> Eq for PrefixView<'a, K, V> {}

impl<'a, 'v, K: TrieKey, V> IntoIterator for &'v PrefixView<'a, K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
