//! Random-pairing substitution (the Mlecchita-vikalpa of the Kama
//! Sutra): the alphabet is split into thirteen random pairs and each
//! symbol swaps with its partner.
//!
//! Because the key pairs symbols symmetrically it is an involution —
//! applying it twice returns the original text — so a single key and a
//! single mapping pass serve both directions.

use crate::alphabet;
use crate::error::{CipherError, Result};
use crate::keymap::{self, SubstitutionKey};
use crate::set::SymbolSet;
use rand::Rng;

/// Generate a fresh pairing key: thirteen disjoint pairs covering the
/// whole alphabet, recorded in both directions.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> SubstitutionKey {
    let mut key = SubstitutionKey::with_capacity(alphabet::WIDTH);
    let mut used = SymbolSet::new();

    while used.len() < alphabet::WIDTH {
        let first = draw_unused(rng, &mut used);
        let second = draw_unused(rng, &mut used);
        key.insert(first, second);
        key.insert(second, first);
    }

    key
}

/// Draw a random symbol that has not been paired yet.
fn draw_unused<R: Rng + ?Sized>(rng: &mut R, used: &mut SymbolSet<char>) -> char {
    loop {
        let symbol = alphabet::symbol_at(rng.gen_range(0..alphabet::WIDTH));
        if used.insert(symbol) {
            return symbol;
        }
    }
}

/// Normalize the plaintext, generate a pairing key, and encipher.
/// The key is returned to the caller; it is not retained.
pub fn encrypt<R: Rng + ?Sized>(plaintext: &str, rng: &mut R) -> Result<(String, SubstitutionKey)> {
    let plaintext = alphabet::normalize(plaintext)?;
    let key = generate_key(rng);
    let symbols: Vec<char> = plaintext.chars().collect();
    let ciphertext = keymap::map_symbols(&symbols, &key)?.into_iter().collect();
    Ok((ciphertext, key))
}

/// Decipher with the same key used to encrypt.
pub fn decrypt(ciphertext: &str, key: &SubstitutionKey) -> Result<String> {
    if key.is_empty() {
        return Err(CipherError::MissingKey);
    }
    let ciphertext = alphabet::normalize(ciphertext)?;
    let symbols: Vec<char> = ciphertext.chars().collect();
    Ok(keymap::map_symbols(&symbols, key)?.into_iter().collect())
}
