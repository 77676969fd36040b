//! Defines traits for converting trie keys into sequences of 8-bit symbols.
//!
//! Text keys use the Latin-1 mapping: every `char` up to `U+00FF` is one symbol with
//! the same numeric value, and any other `char` cannot be stored.
use std::borrow::Cow;
use std::convert::TryFrom;

use crate::{Error, Result};

/// A trait for types that can be read as a sequence of trie symbols.
///
/// This is implemented for unsized types such as `str` and `[u8]` so that lookups
/// can borrow their argument.
pub trait KeySymbols {
    /// Converts the key into its symbols.
    ///
    /// `Cow` allows for borrowing if the key already is a byte slice,
    /// or owning if a conversion is necessary.
    fn symbols(&self) -> Result<Cow<'_, [u8]>>;

    /// Converts the longest leading run of the key that has a symbol encoding.
    fn leading_symbols(&self) -> Cow<'_, [u8]>;
}

/// A key type that the trie can hand back to callers.
pub trait TrieKey: KeySymbols + Sized {
    /// Rebuilds a key from its symbols.
    fn from_symbols(symbols: &[u8]) -> Self;
}

fn latin1(symbol: char) -> Option<u8> {
    u8::try_from(u32::from(symbol)).ok()
}

impl KeySymbols for str {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        if self.is_ascii() {
            return Ok(Cow::Borrowed(self.as_bytes()));
        }

        self.chars()
            .enumerate()
            .map(|(position, symbol)| {
                latin1(symbol).ok_or(Error::UnencodableSymbol { position, symbol })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Cow::Owned)
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        if self.is_ascii() {
            return Cow::Borrowed(self.as_bytes());
        }

        Cow::Owned(self.chars().map_while(latin1).collect())
    }
}

impl KeySymbols for String {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        self.as_str().symbols()
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        self.as_str().leading_symbols()
    }
}

impl TrieKey for String {
    fn from_symbols(symbols: &[u8]) -> Self {
        symbols.iter().map(|&symbol| char::from(symbol)).collect()
    }
}

impl KeySymbols for [u8] {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> KeySymbols for [u8; N] {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(&self[..]))
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self[..])
    }
}

impl KeySymbols for Vec<u8> {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl TrieKey for Vec<u8> {
    fn from_symbols(symbols: &[u8]) -> Self {
        symbols.to_vec()
    }
}

impl<T: KeySymbols + ?Sized> KeySymbols for &T {
    fn symbols(&self) -> Result<Cow<'_, [u8]>> {
        (**self).symbols()
    }

    fn leading_symbols(&self) -> Cow<'_, [u8]> {
        (**self).leading_symbols()
    }
}
