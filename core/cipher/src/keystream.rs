//! Keystream extension.
//!
//! A keyword shorter than the text is stretched by concatenating whole
//! copies of itself and cutting the result to the text length. The cipher
//! extends keyword indices rather than symbols, so the function is generic.

use vigenere_common::{Error, Result};

/// Extend `keyword` to exactly `target_length` symbols.
///
/// # Preconditions
/// - `keyword` must not be empty
///
/// # Postconditions
/// - The result has exactly `target_length` symbols
/// - `result[i] == keyword[i % keyword.len()]`
///
/// # Errors
/// - `EmptyKeyword` if `keyword` is empty
pub fn extend<T: Copy>(keyword: &[T], target_length: usize) -> Result<Vec<T>> {
    if keyword.is_empty() {
        return Err(Error::EmptyKeyword);
    }

    let copies = target_length.div_ceil(keyword.len());
    let mut keystream = keyword.repeat(copies);
    keystream.truncate(target_length);

    Ok(keystream)
}
