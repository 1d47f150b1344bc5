//! Encode and decode over alphabet indices.
//!
//! Encoding adds the keystream index to the text index modulo N; decoding
//! subtracts it. No lookup table is built.

use tracing::debug;

use vigenere_common::{Result, SymbolSource};

use crate::alphabet::Alphabet;
use crate::keystream::extend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// Stateless Vigenère cipher bound to one alphabet.
#[derive(Debug, Clone, Default)]
pub struct Cipher {
    alphabet: Alphabet,
}

impl Cipher {
    /// Create a cipher over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet this cipher operates over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encode `text` with `keyword`.
    ///
    /// # Postconditions
    /// - The output has as many symbols as `text`
    /// - Empty `text` yields an empty string without inspecting `keyword`
    ///
    /// # Errors
    /// - `EmptyKeyword` if `text` is non-empty and `keyword` is empty
    /// - `UnknownSymbol` for the first symbol of `keyword`, then of `text`,
    ///   that is not in the alphabet
    pub fn encode(&self, text: &str, keyword: &str) -> Result<String> {
        self.transform(text, keyword, Direction::Encode)
    }

    /// Decode `cipher_text` with the `keyword` it was encoded with.
    ///
    /// Same preconditions and errors as [`Cipher::encode`].
    pub fn decode(&self, cipher_text: &str, keyword: &str) -> Result<String> {
        self.transform(cipher_text, keyword, Direction::Decode)
    }

    fn transform(&self, text: &str, keyword: &str, direction: Direction) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let key_indices = keyword
            .chars()
            .enumerate()
            .map(|(i, c)| self.alphabet.position_of(c, i, SymbolSource::Keyword))
            .collect::<Result<Vec<_>>>()?;

        let text_len = text.chars().count();
        let keystream = extend(&key_indices, text_len)?;

        debug!(
            ?direction,
            symbols = text_len,
            keyword_symbols = key_indices.len(),
            alphabet = self.alphabet.len(),
            "Applying cipher"
        );

        let n = self.alphabet.len();
        let mut output = String::with_capacity(text.len());
        for (i, (symbol, shift)) in text.chars().zip(keystream).enumerate() {
            let index = self.alphabet.position_of(symbol, i, SymbolSource::Text)?;
            let shifted = match direction {
                Direction::Encode => (index + shift) % n,
                // shift < n, so adding n keeps the subtraction non-negative
                Direction::Decode => (index + n - shift) % n,
            };
            output.push(self.alphabet.symbol_at(shifted));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vigenere_common::Error;

    #[test]
    fn test_textbook_encode() {
        let cipher = Cipher::new(Alphabet::lowercase());
        let encoded = cipher.encode("attackatdawn", "lemon").unwrap();
        assert_eq!(encoded, "lxfopvefrnhr");
    }

    #[test]
    fn test_textbook_decode() {
        let cipher = Cipher::new(Alphabet::lowercase());
        let decoded = cipher.decode("lxfopvefrnhr", "lemon").unwrap();
        assert_eq!(decoded, "attackatdawn");
    }

    #[test]
    fn test_empty_text_is_noop() {
        let cipher = Cipher::default();
        assert_eq!(cipher.encode("", "key").unwrap(), "");
        assert_eq!(cipher.decode("", "key").unwrap(), "");
        assert_eq!(cipher.encode("", "").unwrap(), "");
    }

    #[test]
    fn test_empty_keyword_fails() {
        let cipher = Cipher::default();
        assert!(matches!(cipher.encode("abc", ""), Err(Error::EmptyKeyword)));
        assert!(matches!(cipher.decode("abc", ""), Err(Error::EmptyKeyword)));
    }

    #[test]
    fn test_unknown_text_symbol_reports_position() {
        let cipher = Cipher::new(Alphabet::lowercase());
        let err = cipher.encode("ab?", "key").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSymbol {
                symbol: '?',
                position: 2,
                origin: SymbolSource::Text,
            }
        ));
    }

    #[test]
    fn test_space_not_in_default_alphabet() {
        let cipher = Cipher::default();
        let err = cipher.encode("hello world", "key").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSymbol {
                symbol: ' ',
                position: 5,
                origin: SymbolSource::Text,
            }
        ));
    }

    #[test]
    fn test_unknown_keyword_symbol() {
        let cipher = Cipher::new(Alphabet::lowercase());
        let err = cipher.decode("abc", "keY").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSymbol {
                symbol: 'Y',
                position: 2,
                origin: SymbolSource::Keyword,
            }
        ));
    }

    #[test]
    fn test_unused_keyword_tail_still_validated() {
        let cipher = Cipher::new(Alphabet::lowercase());
        let err = cipher.encode("a", "ok!").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSymbol {
                symbol: '!',
                origin: SymbolSource::Keyword,
                ..
            }
        ));
    }

    #[test]
    fn test_default_alphabet_wraps_around() {
        let cipher = Cipher::default();
        // ')' is the last symbol, 'b' shifts by one
        assert_eq!(cipher.encode(")", "b").unwrap(), "a");
        assert_eq!(cipher.decode("a", "b").unwrap(), ")");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let cipher = Cipher::default();
        let first = cipher.encode("Secret#2024", "Key!").unwrap();
        let second = cipher.encode("Secret#2024", "Key!").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.chars().count(), 11);
    }

    #[test]
    fn test_cipher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cipher>();
    }

    fn default_text(max: usize) -> impl Strategy<Value = String> {
        let symbols: Vec<char> = Alphabet::default().symbols().to_vec();
        proptest::collection::vec(proptest::sample::select(symbols), 0..max)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_round_trip(text in default_text(64), keyword in default_text(16)) {
            prop_assume!(!keyword.is_empty());
            let cipher = Cipher::default();
            let encoded = cipher.encode(&text, &keyword).unwrap();
            prop_assert_eq!(encoded.chars().count(), text.chars().count());
            let decoded = cipher.decode(&encoded, &keyword).unwrap();
            prop_assert_eq!(decoded, text);
        }

        #[test]
        fn prop_decode_then_encode(text in default_text(64), keyword in default_text(16)) {
            prop_assume!(!keyword.is_empty());
            let cipher = Cipher::default();
            let decoded = cipher.decode(&text, &keyword).unwrap();
            prop_assert_eq!(cipher.encode(&decoded, &keyword).unwrap(), text);
        }
    }
}
