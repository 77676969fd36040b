//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the symbol table API on top
//! of the node tree.

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use tracing::warn;

use crate::iter::{Iter, Keys, Matches, Values};
use crate::key::{KeySymbols, TrieKey};
use crate::node::TrieNode;
use crate::prefix_view::PrefixView;
use crate::{Result, LOG_TARGET};

/// An ordered symbol table with keys over a 256-symbol alphabet.
///
/// Every key is stored as a path of symbols from the root, one node per symbol, and
/// the node at the end of the path holds the value. Nodes that no longer lead to a
/// value are pruned on removal, so the tree only ever holds paths to stored keys.
///
/// `K` is the key type handed back by queries such as [`keys`](Trie::keys) and
/// [`longest_prefix_of`](Trie::longest_prefix_of). Lookups accept anything that
/// implements [`KeySymbols`], so a `Trie<String, _>` can be queried with `&str`.
pub struct Trie<K, V> {
    /// The root node of the trie, standing for the empty key
    pub(crate) root: TrieNode<V>,

    /// The number of values stored in the trie
    count: usize,

    _key: PhantomData<fn() -> K>,
}

impl<K, V> Trie<K, V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let trie = Trie::<String, i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            count: 0,
            _key: PhantomData,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.count
    }

    /// Same as [`len`](Trie::len).
    pub fn size(&self) -> usize {
        self.count
    }

    /// Returns `true` if the trie contains no values.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes every key from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.count = 0;
    }

    /// Returns an iterator over all values, in key order.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(&self.root)
    }
}

impl<K: TrieKey, V> Trie<K, V> {
    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// A key that cannot be encoded as symbols is never stored, so it is reported
    /// as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get("hello"), Some(&42));
    /// assert_eq!(trie.get("hell"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: KeySymbols + ?Sized,
    {
        let symbols = key.symbols().ok()?;
        self.root.descend(&symbols)?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored for the given key, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: KeySymbols + ?Sized,
    {
        let symbols = key.symbols().ok()?;
        self.root.descend_mut(&symbols)?.value.as_mut()
    }

    /// Returns `true` if the trie contains a value for the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: KeySymbols + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Same as [`contains_key`](Trie::contains_key).
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: KeySymbols + ?Sized,
    {
        self.contains_key(key)
    }

    /// Associates `value` with `key`, or removes `key` when `value` is `None`.
    ///
    /// Returns the value previously stored for the key. Overwriting an existing key
    /// does not change [`len`](Trie::len).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnencodableSymbol`](crate::Error::UnencodableSymbol) when
    /// `key` contains a character outside the 8-bit alphabet; the trie is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// assert_eq!(trie.put("sea", Some(1)), Ok(None));
    /// assert_eq!(trie.put("sea", Some(2)), Ok(Some(1)));
    /// assert_eq!(trie.put("sea", None), Ok(Some(2)));
    /// assert!(trie.is_empty());
    /// assert!(trie.put("€", Some(3)).is_err());
    /// ```
    pub fn put<Q>(&mut self, key: &Q, value: Option<V>) -> Result<Option<V>>
    where
        Q: KeySymbols + ?Sized,
    {
        let value = match value {
            Some(value) => value,
            None => return Ok(self.delete(key)),
        };

        let symbols = key.symbols()?;
        let previous = self.root.descend_or_create(&symbols).value.replace(value);
        if previous.is_none() {
            self.count += 1;
        }

        Ok(previous)
    }

    /// Inserts a key-value pair, returning the value previously stored for the key.
    ///
    /// See [`put`](Trie::put) for the error conditions.
    pub fn insert<Q>(&mut self, key: &Q, value: V) -> Result<Option<V>>
    where
        Q: KeySymbols + ?Sized,
    {
        self.put(key, Some(value))
    }

    /// Removes a key from the trie, returning its value if it was present.
    ///
    /// Removing a missing key is a no-op. Nodes left with neither a value nor
    /// children are pruned back up the key's path; the root always stays.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let mut trie = Trie::<String, i32>::new();
    /// trie.insert("shells", 1).unwrap();
    ///
    /// assert_eq!(trie.delete("shells"), Some(1));
    /// assert_eq!(trie.delete("shells"), None);
    /// assert_eq!(trie.keys_with_prefix("sh").count(), 0);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: KeySymbols + ?Sized,
    {
        let symbols = key.symbols().ok()?;
        let removed = self.root.remove(&symbols);
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Same as [`delete`](Trie::delete).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: KeySymbols + ?Sized,
    {
        self.delete(key)
    }

    /// Returns every key in the trie, in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns every key that starts with `prefix`, in ascending order.
    ///
    /// The prefix itself is included when it is a stored key. Each call starts a
    /// fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let trie: Trie<String, i32> = vec![("she", 0), ("shells", 1), ("sea", 2)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let keys: Vec<String> = trie.keys_with_prefix("sh").collect();
    /// assert_eq!(keys, vec!["she", "shells"]);
    /// ```
    pub fn keys_with_prefix<Q>(&self, prefix: &Q) -> Keys<'_, K, V>
    where
        Q: KeySymbols + ?Sized,
    {
        Keys::new(self.iter_prefix(prefix))
    }

    /// Returns every key-value pair, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(Some(&self.root), Vec::new())
    }

    /// Returns every key-value pair whose key starts with `prefix`, in ascending key
    /// order.
    pub fn iter_prefix<Q>(&self, prefix: &Q) -> Iter<'_, K, V>
    where
        Q: KeySymbols + ?Sized,
    {
        match prefix.symbols() {
            Ok(symbols) => Iter::new(self.root.descend(&symbols), symbols.into_owned()),
            Err(_) => Iter::new(None, Vec::new()),
        }
    }

    /// Returns every key with exactly as many symbols as `pattern` that matches it
    /// symbol by symbol, where [`WILDCARD`](crate::WILDCARD) (`.`) matches any symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let trie: Trie<String, i32> = vec![("she", 0), ("the", 1), ("shells", 2)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let keys: Vec<String> = trie.keys_that_match(".he").collect();
    /// assert_eq!(keys, vec!["she", "the"]);
    /// ```
    pub fn keys_that_match<Q>(&self, pattern: &Q) -> Matches<'_, K, V>
    where
        Q: KeySymbols + ?Sized,
    {
        let pattern = pattern.symbols().ok().map(|symbols| symbols.into_owned());
        Matches::new(&self.root, pattern)
    }

    /// Returns the longest stored key that is a prefix of `query`, or `None` when no
    /// stored key is.
    ///
    /// A stored empty key is a prefix of every query, so it is returned when nothing
    /// longer matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_st::Trie;
    ///
    /// let trie: Trie<String, i32> = vec![("she", 0), ("sells", 1), ("shell", 2)]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert_eq!(trie.longest_prefix_of("shellsort"), Some("shell".to_string()));
    /// assert_eq!(trie.longest_prefix_of("shely"), Some("she".to_string()));
    /// assert_eq!(trie.longest_prefix_of("sh"), None);
    /// ```
    pub fn longest_prefix_of<Q>(&self, query: &Q) -> Option<K>
    where
        Q: KeySymbols + ?Sized,
    {
        // No stored key can reach past an unencodable character
        let symbols = query.leading_symbols();

        let mut current = &self.root;
        let mut longest = current.value.as_ref().map(|_| 0);

        for (depth, symbol) in symbols.iter().enumerate() {
            current = match current.children.get(symbol) {
                Some(child) => child,
                None => break,
            };
            if current.value.is_some() {
                longest = Some(depth + 1);
            }
        }

        longest.map(|len| K::from_symbols(&symbols[..len]))
    }

    /// Creates a view of the subtrie at the given key prefix.
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
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(view.get("help"), Some(&2));
    /// assert_eq!(view.get("world"), None);
    /// ```
    pub fn view_subtrie<Q>(&self, prefix: &Q) -> PrefixView<'_, K, V>
    where
        Q: KeySymbols + ?Sized,
    {
        PrefixView::new(self, prefix)
    }
}

impl<K, V> Default for Trie<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V: Clone> Clone for Trie<K, V> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            count: self.count,
            _key: PhantomData,
        }
    }
}

impl<K, V> fmt::Debug for Trie<K, V>
where
    K: TrieKey + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Pruning keeps the node tree canonical, so equal contents means equal trees
impl<K, V: PartialEq> PartialEq for Trie<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.root == other.root
    }
}

impl<K, V: Eq> Eq for Trie<K, V> {}

/// Inserts every pair, overwriting existing keys.
///
/// Keys that cannot be encoded are skipped and reported with a `warn!` event; use
/// [`Trie::insert`] to handle them as errors.
impl<K: TrieKey, V> Extend<(K, V)> for Trie<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(error) = self.insert(&key, value) {
                warn!(target: LOG_TARGET, error = %error, "Skipping unencodable key");
            }
        }
    }
}

/// Same as the `Extend<(K, V)>` impl, for `&str` keys.
impl<'k, V> Extend<(&'k str, V)> for Trie<String, V> {
    fn extend<I: IntoIterator<Item = (&'k str, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(error) = self.insert(key, value) {
                warn!(target: LOG_TARGET, error = %error, "Skipping unencodable key");
            }
        }
    }
}

/// Builds a trie through [`Extend`], so unencodable keys are skipped the same way.
impl<K: TrieKey, V> FromIterator<(K, V)> for Trie<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'k, V> FromIterator<(&'k str, V)> for Trie<String, V> {
    fn from_iter<I: IntoIterator<Item = (&'k str, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, K: TrieKey, V> IntoIterator for &'a Trie<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
