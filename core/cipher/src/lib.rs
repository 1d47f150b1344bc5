//! Vigenère cipher engine.
//!
//! This module provides:
//! - An explicit, immutable alphabet that defines the substitution universe
//! - Keystream extension by whole-copy repetition of a keyword
//! - Encode/decode by modular arithmetic over alphabet indices
//! - Password derivation from a shuffled base and keyword
//!
//! # Security
//! This is a classical cipher. It offers no confidentiality against an
//! attacker and must not be used to protect real secrets.

pub mod alphabet;
pub mod config;
pub mod derive;
pub mod engine;
pub mod keystream;

pub use alphabet::{Alphabet, ALPHABET_VERSION, DEFAULT_ALPHABET};
pub use config::AlphabetConfig;
pub use derive::{derive_password, derive_password_with_rng, DEFAULT_PASSWORD_LENGTH};
pub use engine::Cipher;
pub use keystream::extend;
