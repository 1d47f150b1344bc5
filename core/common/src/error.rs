//! Common error types for the Vigenère toolkit.

use std::fmt;

use thiserror::Error;

/// Which input a rejected symbol was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSource {
    /// The text being encoded or decoded.
    Text,
    /// The keyword driving the keystream.
    Keyword,
}

impl fmt::Display for SymbolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolSource::Text => write!(f, "text"),
            SymbolSource::Keyword => write!(f, "keyword"),
        }
    }
}

/// Top-level error type for cipher and password operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol is not part of the configured alphabet.
    #[error("Unknown symbol {symbol:?} at position {position} of the {origin}")]
    UnknownSymbol {
        symbol: char,
        position: usize,
        origin: SymbolSource,
    },

    /// A keystream was requested from an empty keyword.
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    /// A required input was empty.
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    /// More password symbols were requested than the derived pool holds.
    #[error("Requested length {requested} exceeds the {available} symbols available")]
    RequestedLengthExceedsAvailable { requested: usize, available: usize },

    /// The alphabet definition is unusable.
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// The alphabet definition repeats a symbol.
    #[error("Duplicate symbol {symbol:?} in alphabet at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: usize,
        second: usize,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
