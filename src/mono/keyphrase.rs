//! Keyphrase-derived substitution. A memorable phrase seeds a full
//! permutation of the alphabet: the phrase's letters (first appearance
//! only) come first, then the unused letters of the alphabet starting
//! just after the phrase's last letter and wrapping around. The keyspace
//! grows from the 26 alphabets of a rotation cipher to 26!.

use crate::alphabet;
use crate::error::{CipherError, Result};
use crate::keymap::{self, SubstitutionKey};
use crate::set::SymbolSet;

/// Build the cipher alphabet a phrase describes: deduplicated phrase
/// letters, then the remaining alphabet wrapped from just past the
/// phrase's last letter.
fn derive_cipher_alphabet(keyphrase: &str) -> Result<Vec<char>> {
    let phrase = alphabet::normalize(keyphrase)?;
    let last_index = phrase
        .chars()
        .last()
        .and_then(alphabet::index_of)
        .ok_or(CipherError::EmptyInput)?;

    let mut candidates: Vec<char> = phrase.chars().collect();
    for step in 1..=alphabet::WIDTH {
        candidates.push(alphabet::symbol_at(last_index + step));
    }

    let mut seen = SymbolSet::new();
    let mut cipher_alphabet = Vec::with_capacity(alphabet::WIDTH);
    for symbol in candidates {
        if seen.insert(symbol) {
            cipher_alphabet.push(symbol);
        }
    }

    Ok(cipher_alphabet)
}

/// Derive the substitution key a keyphrase describes, assigning the
/// cipher alphabet positionally against the plain `A..Z`.
pub fn derive_key(keyphrase: &str) -> Result<SubstitutionKey> {
    let cipher_alphabet = derive_cipher_alphabet(keyphrase)?;
    Ok(alphabet::symbols().zip(cipher_alphabet).collect())
}

/// Encipher normalized plaintext under the phrase-derived permutation.
pub fn encrypt(plaintext: &str, keyphrase: &str) -> Result<String> {
    let plaintext = alphabet::normalize(plaintext)?;
    let key = derive_key(keyphrase)?;
    let symbols: Vec<char> = plaintext.chars().collect();
    Ok(keymap::map_symbols(&symbols, &key)?.into_iter().collect())
}

/// Decipher by inverting the phrase-derived permutation.
pub fn decrypt(ciphertext: &str, keyphrase: &str) -> Result<String> {
    let ciphertext = alphabet::normalize(ciphertext)?;
    let key = keymap::invert(&derive_key(keyphrase)?)?;
    let symbols: Vec<char> = ciphertext.chars().collect();
    Ok(keymap::map_symbols(&symbols, &key)?.into_iter().collect())
}
