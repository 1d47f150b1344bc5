//! The ordered symbol set a cipher operates over.
//!
//! Symbol order is part of the wire format: two installations can only
//! exchange encoded text if their alphabets are identical, symbol for symbol.

use std::collections::HashMap;
use std::fmt;

use vigenere_common::{Error, Result, SymbolSource};

/// Version of [`DEFAULT_ALPHABET`]. Bump whenever its membership or order changes.
pub const ALPHABET_VERSION: u32 = 1;

/// Default alphabet: lowercase, uppercase, `#`, digits and punctuation (76 symbols).
pub const DEFAULT_ALPHABET: &str =
    r"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ#1234567890/\.,!@$%^&*()";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Ordered, duplicate-free sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Create an alphabet from a string of unique symbols.
    ///
    /// # Preconditions
    /// - `symbols` must not be empty
    /// - No symbol may appear twice
    ///
    /// # Errors
    /// - `InvalidAlphabet` if `symbols` is empty
    /// - `DuplicateSymbol` naming the first repeated symbol
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::InvalidAlphabet(
                "Alphabet must contain at least one symbol".to_string(),
            ));
        }

        let symbols: Vec<char> = symbols.chars().collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if let Some(first) = index.insert(symbol, position) {
                return Err(Error::DuplicateSymbol {
                    symbol,
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { symbols, index })
    }

    /// The 26 lowercase English letters, as used by the textbook cipher.
    pub fn lowercase() -> Self {
        Self::from_unique(LOWERCASE)
    }

    fn from_unique(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, index }
    }

    /// Number of symbols (N).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Zero-based position of `symbol`, if present.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Position of `symbol`, failing with `UnknownSymbol` when it is absent.
    ///
    /// `position` and `origin` describe where the symbol was read so the
    /// error can point at it.
    pub fn position_of(
        &self,
        symbol: char,
        position: usize,
        origin: SymbolSource,
    ) -> Result<usize> {
        self.index_of(symbol).ok_or(Error::UnknownSymbol {
            symbol,
            position,
            origin,
        })
    }

    /// Symbol at `position`, taken modulo N.
    pub fn symbol_at(&self, position: usize) -> char {
        self.symbols[position % self.symbols.len()]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_unique(DEFAULT_ALPHABET)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
