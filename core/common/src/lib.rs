//! Common types shared across the Vigenère toolkit crates.
//!
//! This module provides the error type used by every layer and the
//! zeroizing wrapper used for derived passwords.

pub mod error;
pub mod types;

pub use error::{Error, Result, SymbolSource};
pub use types::SecretText;
