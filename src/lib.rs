//! # Trie Symbol Table
//!
//! An ordered string symbol table backed by a 256-way trie.
//!
//! Keys are sequences of 8-bit symbols. Each node of the trie owns an ordered map of
//! children keyed by symbol, so every traversal visits keys in ascending symbol order.
//!
//! ## Features
//!
//! - **Symbol table API**: `get`, `contains_key`, `put`/`insert`, `delete`, `len`, `is_empty`
//! - **Prefix queries**: enumerate every key that starts with a prefix
//! - **Wildcard matching**: enumerate keys matching a pattern where `.` matches any symbol
//! - **Longest prefix**: find the longest stored key that is a prefix of a query
//! - **Prefix Views**: borrow the subtrie under a prefix and query it in isolation
//!
//! ## Example
//!
//! ```rust
//! use trie_st::Trie;
//!
//! let mut trie = Trie::<String, u32>::new();
//! trie.insert("she", 0).unwrap();
//! trie.insert("sells", 1).unwrap();
//! trie.insert("shell", 2).unwrap();
//!
//! assert_eq!(trie.get("shell"), Some(&2));
//! assert_eq!(trie.longest_prefix_of("shellsort"), Some("shell".to_string()));
//! assert_eq!(trie.keys_that_match("s.e").collect::<Vec<_>>(), vec!["she".to_string()]);
//! ```

pub mod iter;
pub mod key;
mod node;
mod prefix_view;
mod trie;

// Re-export public types
pub use crate::iter::{Iter, Keys, Matches, Values};
pub use crate::key::{KeySymbols, TrieKey};
pub use crate::prefix_view::PrefixView;
pub use crate::trie::Trie;

/// Number of distinct symbols a key position can take.
pub const RADIX: usize = 256;

/// Pattern symbol matching any single symbol in [`Trie::keys_that_match`].
pub const WILDCARD: u8 = b'.';

/// `tracing` target used by every event this crate emits.
pub const LOG_TARGET: &str = "trie_st";

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key character has no 8-bit symbol
    #[error("character {symbol:?} at position {position} is outside the 8-bit key alphabet")]
    UnencodableSymbol {
        /// Character index of the offending character within the key
        position: usize,
        /// The offending character
        symbol: char,
    },
}

/// Result type used by fallible trie operations.
pub type Result<T> = std::result::Result<T, Error>;
