//! Alphabet configuration file.
//!
//! Encoded text is only portable between installations sharing the same
//! alphabet, so the alphabet can be exported to and loaded from a small
//! JSON document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use vigenere_common::{Error, Result};

use crate::alphabet::{Alphabet, ALPHABET_VERSION};

/// Serialized alphabet definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetConfig {
    /// Format version; must match [`ALPHABET_VERSION`].
    pub version: u32,
    /// The symbols in order.
    pub symbols: String,
}

impl AlphabetConfig {
    /// Describe an existing alphabet.
    pub fn from_alphabet(alphabet: &Alphabet) -> Self {
        Self {
            version: ALPHABET_VERSION,
            symbols: alphabet.to_string(),
        }
    }

    /// Check if this config can be read by this build.
    pub fn is_compatible(&self) -> bool {
        self.version == ALPHABET_VERSION
    }

    /// Build the alphabet this config describes.
    ///
    /// # Errors
    /// - `InvalidInput` if the version is not supported
    /// - Any error from [`Alphabet::new`]
    pub fn into_alphabet(self) -> Result<Alphabet> {
        if !self.is_compatible() {
            return Err(Error::InvalidInput(format!(
                "Unsupported alphabet version {} (expected {})",
                self.version, ALPHABET_VERSION
            )));
        }
        Alphabet::new(&self.symbols)
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Serialization(format!("Invalid alphabet config: {}", e)))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize alphabet: {}", e)))
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading alphabet config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write this config to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Saving alphabet config to {}", path.display());
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::from_alphabet(&Alphabet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DEFAULT_ALPHABET;

    #[test]
    fn test_default_config() {
        let config = AlphabetConfig::default();
        assert_eq!(config.version, ALPHABET_VERSION);
        assert_eq!(config.symbols, DEFAULT_ALPHABET);
        assert_eq!(config.into_alphabet().unwrap(), Alphabet::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alphabet.json");

        let config = AlphabetConfig::from_alphabet(&Alphabet::lowercase());
        config.save(&path).unwrap();

        let loaded = AlphabetConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.into_alphabet().unwrap(), Alphabet::lowercase());
    }

    #[test]
    fn test_from_json() {
        let config = AlphabetConfig::from_json(r#"{"version": 1, "symbols": "abc"}"#).unwrap();
        let alphabet = config.into_alphabet().unwrap();
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn test_unsupported_version_fails() {
        let config = AlphabetConfig {
            version: ALPHABET_VERSION + 1,
            symbols: "abc".to_string(),
        };
        assert!(!config.is_compatible());
        assert!(matches!(config.into_alphabet(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let config = AlphabetConfig::from_json(r#"{"version": 1, "symbols": "abca"}"#).unwrap();
        assert!(matches!(
            config.into_alphabet(),
            Err(Error::DuplicateSymbol { symbol: 'a', .. })
        ));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            AlphabetConfig::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AlphabetConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
