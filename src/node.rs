//! Internal node implementation for the trie.
//!
//! A `TrieNode` represents one position in the key-symbol space. Its position (the
//! key prefix it stands for) is implied by the path from the root and is never stored.

use std::collections::BTreeMap;

use tracing::trace;

use crate::LOG_TARGET;

/// Internal node type for the trie.
///
/// Each node holds an optional value and exclusively owns its children, which are
/// kept in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode<V> {
    /// The value stored at this node, if a key ends here
    pub value: Option<V>,

    /// Child nodes indexed by the symbol on the edge leading to them
    pub children: BTreeMap<u8, TrieNode<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a new node with no value and no children
    pub fn new() -> Self {
        TrieNode {
            value: None,
            children: BTreeMap::new(),
        }
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = if self.value.is_some() { 1 } else { 0 };

        for child in self.children.values() {
            count += child.subtree_size();
        }

        count
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node carries nothing and can be cut from its parent
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.is_leaf()
    }

    /// Follows `symbols` down from this node.
    pub fn descend(&self, symbols: &[u8]) -> Option<&TrieNode<V>> {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get(symbol)?;
        }
        Some(current)
    }

    /// Follows `symbols` down from this node, mutably.
    pub fn descend_mut(&mut self, symbols: &[u8]) -> Option<&mut TrieNode<V>> {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get_mut(symbol)?;
        }
        Some(current)
    }

    /// Follows `symbols` down from this node, creating any missing nodes on the way.
    pub fn descend_or_create(&mut self, symbols: &[u8]) -> &mut TrieNode<V> {
        symbols.iter().fold(self, |node, &symbol| {
            node.children.entry(symbol).or_insert_with(TrieNode::new)
        })
    }

    /// Takes the value stored at `symbols` below this node, then prunes every node on
    /// the walked path that was left with no value and no children.
    ///
    /// The node this is called on is never removed; only its descendants are.
    pub fn remove(&mut self, symbols: &[u8]) -> Option<V> {
        self.remove_at_depth(symbols, 0)
    }

    fn remove_at_depth(&mut self, symbols: &[u8], depth: usize) -> Option<V> {
        let (&symbol, rest) = match symbols.split_first() {
            Some(split) => split,
            None => return self.value.take(),
        };

        let child = self.children.get_mut(&symbol)?;
        let removed = child.remove_at_depth(rest, depth + 1);

        // Nothing changed below if nothing was removed, and the tree was already minimal
        if removed.is_some() && child.is_prunable() {
            self.children.remove(&symbol);
            trace!(target: LOG_TARGET, symbol = ?symbol, depth = ?depth, "Pruned empty subtrie");
        }

        removed
    }

    /// Returns the number of nodes in this subtree, including this one
    #[cfg(test)]
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
