//! Password derivation.
//!
//! The base and keyword are shuffled independently, the shuffled base is
//! encoded with the shuffled keyword, and the password is a random sample
//! of the resulting symbols. Output is intentionally not reproducible
//! unless the caller supplies a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use vigenere_common::{Error, Result, SecretText, SymbolSource};

use crate::alphabet::Alphabet;
use crate::engine::Cipher;

/// Password length used when the caller does not ask for one.
pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Derive a password using the thread-local random generator.
///
/// See [`derive_password_with_rng`] for the contract.
pub fn derive_password(
    cipher: &Cipher,
    base: &str,
    keyword: &str,
    length: usize,
) -> Result<SecretText> {
    derive_password_with_rng(cipher, base, keyword, length, &mut rand::thread_rng())
}

/// Derive a password of `length` symbols from `base` and `keyword`.
///
/// # Preconditions
/// - `base` and `keyword` must be non-empty
/// - Every symbol of both must belong to the cipher's alphabet
/// - `length` must not exceed the symbol count of `base`
///
/// # Postconditions
/// - Returns exactly `length` symbols drawn without replacement from the
///   encoded shuffled base, in random order
///
/// # Errors
/// - `EmptyInput` if `base` or `keyword` is empty
/// - `UnknownSymbol` at the offending position of the unshuffled input
/// - `RequestedLengthExceedsAvailable` if `length` is too large
pub fn derive_password_with_rng<R: Rng + ?Sized>(
    cipher: &Cipher,
    base: &str,
    keyword: &str,
    length: usize,
    rng: &mut R,
) -> Result<SecretText> {
    if base.is_empty() {
        return Err(Error::EmptyInput("Base"));
    }
    if keyword.is_empty() {
        return Err(Error::EmptyInput("Keyword"));
    }

    // Validate before shuffling so reported positions refer to the caller's input
    let alphabet = cipher.alphabet();
    let mut base_symbols = Zeroizing::new(collect_symbols(alphabet, base, SymbolSource::Text)?);
    let mut keyword_symbols =
        Zeroizing::new(collect_symbols(alphabet, keyword, SymbolSource::Keyword)?);

    let available = base_symbols.len();
    if length > available {
        return Err(Error::RequestedLengthExceedsAvailable {
            requested: length,
            available,
        });
    }

    let shuffled_base = shuffle_secret(&mut base_symbols, rng);
    let shuffled_keyword = shuffle_secret(&mut keyword_symbols, rng);
    let intermediate = SecretText::new(cipher.encode(&shuffled_base, &shuffled_keyword)?);

    debug!(requested = length, available, "Sampling password symbols");

    let pool = Zeroizing::new(intermediate.chars().collect::<Vec<char>>());
    let password: String = pool.choose_multiple(rng, length).collect();

    Ok(SecretText::new(password))
}

/// Shuffle `symbols` in place and return them as zeroizing text.
fn shuffle_secret<R: Rng + ?Sized>(symbols: &mut [char], rng: &mut R) -> SecretText {
    symbols.shuffle(rng);
    SecretText::new(symbols.iter().collect::<String>())
}

fn collect_symbols(alphabet: &Alphabet, input: &str, origin: SymbolSource) -> Result<Vec<char>> {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| alphabet.position_of(c, i, origin).map(|_| c))
        .collect()
}
