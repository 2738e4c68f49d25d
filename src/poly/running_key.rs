//! Running-key (Vigenère-style) substitution. The key is cycled across
//! the text and each position shifts by its key symbol, so a plaintext
//! letter can encipher differently at every occurrence.
//!
//! This variant adds a fixed extra offset of 1 on top of the key shift:
//! `cipher[i] = (plain[i] + key[i mod klen] + 1) mod 26`. That is not
//! the textbook Vigenère square and is intentional; both directions and
//! any interoperating implementation must carry the same `+1`.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Positions of the key's symbols, cyclically indexed against the text.
fn key_indices(keytext: &str) -> Result<Vec<usize>> {
    let key = alphabet::normalize(keytext)?;
    Ok(key.chars().filter_map(alphabet::index_of).collect())
}

/// Encipher under a cycled key. Both text and key are normalized first;
/// either stripping to nothing is an error.
pub fn encrypt(plaintext: &str, keytext: &str) -> Result<String> {
    let plaintext = alphabet::normalize(plaintext)?;
    let key = key_indices(keytext)?;

    let mut ciphertext = String::with_capacity(plaintext.len());
    for (position, symbol) in plaintext.chars().enumerate() {
        if let Some(plain_index) = alphabet::index_of(symbol) {
            let shift = key[position % key.len()];
            ciphertext.push(alphabet::symbol_at(
                (plain_index + shift + 1) % alphabet::WIDTH,
            ));
        }
    }

    Ok(ciphertext)
}

/// Decipher by subtracting the cycled key, reducing negative results
/// back into the alphabet.
pub fn decrypt(ciphertext: &str, keytext: &str) -> Result<String> {
    let ciphertext = alphabet::normalize(ciphertext)?;
    let key = key_indices(keytext)?;

    let mut plaintext = String::with_capacity(ciphertext.len());
    for (position, symbol) in ciphertext.chars().enumerate() {
        if let Some(cipher_index) = alphabet::index_of(symbol) {
            let shift = key[position % key.len()];
            let plain_index =
                (cipher_index as i32 - shift as i32 - 1).rem_euclid(alphabet::WIDTH as i32);
            plaintext.push(alphabet::symbol_at(plain_index as usize));
        }
    }

    Ok(plaintext)
}
