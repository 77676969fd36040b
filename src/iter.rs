//! Lazy iterators over the contents of a trie.
//!
//! Every iterator here performs a depth-first traversal with an explicit stack. The
//! children of a node are pushed in descending symbol order so that they are popped
//! in ascending order, which makes every traversal yield keys in lexicographic order
//! of their symbols. Each stack entry carries its own copy of the path from the root.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::key::TrieKey;
use crate::node::TrieNode;
use crate::WILDCARD;

type Frame<'a, V> = (&'a TrieNode<V>, Vec<u8>);

fn push_children<'a, V>(stack: &mut Vec<Frame<'a, V>>, node: &'a TrieNode<V>, path: &[u8]) {
    for (&symbol, child) in node.children.iter().rev() {
        let mut child_path = Vec::with_capacity(path.len() + 1);
        child_path.extend_from_slice(path);
        child_path.push(symbol);
        stack.push((child, child_path));
    }
}

/// Preorder walk over every value-bearing node below a starting node.
struct Walk<'a, V> {
    stack: Vec<Frame<'a, V>>,
}

impl<'a, V> Clone for Walk<'a, V> {
    fn clone(&self) -> Self {
        Walk {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, V> Walk<'a, V> {
    fn new(start: Option<&'a TrieNode<V>>, prefix: Vec<u8>) -> Self {
        Walk {
            stack: start.map(|node| (node, prefix)).into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for Walk<'a, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            push_children(&mut self.stack, node, &path);

            if let Some(value) = &node.value {
                return Some((path, value));
            }
        }

        None
    }
}

/// An iterator over the key-value pairs of a trie or of one of its subtries.
///
/// Created by [`Trie::iter`](crate::Trie::iter) and
/// [`Trie::iter_prefix`](crate::Trie::iter_prefix).
pub struct Iter<'a, K, V> {
    walk: Walk<'a, V>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// `start` is the node reached by `prefix`, if that path exists.
    pub(crate) fn new(start: Option<&'a TrieNode<V>>, prefix: Vec<u8>) -> Self {
        Iter {
            walk: Walk::new(start, prefix),
            _key: PhantomData,
        }
    }
}

impl<'a, K: TrieKey, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .next()
            .map(|(path, value)| (K::from_symbols(&path), value))
    }
}

impl<'a, K: TrieKey, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            walk: self.walk.clone(),
            _key: PhantomData,
        }
    }
}

/// An iterator over the keys of a trie that start with a given prefix.
///
/// Created by [`Trie::keys`](crate::Trie::keys) and
/// [`Trie::keys_with_prefix`](crate::Trie::keys_with_prefix).
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Keys { inner }
    }
}

impl<'a, K: TrieKey, V> Iterator for Keys<'a, K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<'a, K: TrieKey, V> FusedIterator for Keys<'a, K, V> {}

/// An iterator over the values of a trie, in key order.
///
/// Created by [`Trie::values`](crate::Trie::values).
pub struct Values<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(root: &'a TrieNode<V>) -> Self {
        Values {
            walk: Walk::new(Some(root), Vec::new()),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.walk.next().map(|(_, value)| value)
    }
}

/// An iterator over the keys of a trie matching a wildcard pattern.
///
/// The walk never goes deeper than the pattern is long, so its cost is bounded by
/// the pattern rather than by the longest stored key.
///
/// Created by [`Trie::keys_that_match`](crate::Trie::keys_that_match).
pub struct Matches<'a, K, V> {
    pattern: Vec<u8>,
    stack: Vec<Frame<'a, V>>,
    _key: PhantomData<fn() -> K>,
}

impl<'a, K, V> Matches<'a, K, V> {
    /// A `None` pattern matches nothing.
    pub(crate) fn new(root: &'a TrieNode<V>, pattern: Option<Vec<u8>>) -> Self {
        match pattern {
            Some(pattern) => Matches {
                pattern,
                stack: vec![(root, Vec::new())],
                _key: PhantomData,
            },
            None => Matches {
                pattern: Vec::new(),
                stack: Vec::new(),
                _key: PhantomData,
            },
        }
    }
}

impl<'a, K: TrieKey, V> Iterator for Matches<'a, K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some((node, path)) = self.stack.pop() {
            let depth = path.len();

            if depth == self.pattern.len() {
                if node.value.is_some() {
                    return Some(K::from_symbols(&path));
                }
                continue;
            }

            let symbol = self.pattern[depth];
            if symbol == WILDCARD {
                push_children(&mut self.stack, node, &path);
            } else if let Some(child) = node.children.get(&symbol) {
                let mut child_path = path;
                child_path.push(symbol);
                self.stack.push((child, child_path));
            }
        }

        None
    }
}

impl<'a, K: TrieKey, V> FusedIterator for Matches<'a, K, V> {}
