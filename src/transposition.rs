//! Rail fence transposition over two rails.
//!
//! The plaintext is split by position parity into two interleaved rails;
//! the ciphertext is the even-index rail followed by the odd-index rail.
//! No substitution takes place, only rearrangement.

use crate::error::{CipherError, Result};

/// Encipher by splitting into two rails and concatenating them.
pub fn encrypt(plaintext: &str) -> Result<String> {
    if plaintext.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let mut top = String::with_capacity(plaintext.len() / 2 + 1);
    let mut bottom = String::with_capacity(plaintext.len() / 2);

    for (position, symbol) in plaintext.chars().enumerate() {
        if position % 2 == 0 {
            top.push(symbol);
        } else {
            bottom.push(symbol);
        }
    }

    top.push_str(&bottom);
    Ok(top)
}

/// Decipher by splitting at the midpoint and re-interleaving.
///
/// The first half is the longer one — `ceil(len / 2)` — so an odd-length
/// ciphertext puts its extra symbol on the top rail, matching encrypt.
pub fn decrypt(ciphertext: &str) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let symbols: Vec<char> = ciphertext.chars().collect();
    let split = (symbols.len() + 1) / 2;
    let (top, bottom) = symbols.split_at(split);

    let mut plaintext = String::with_capacity(symbols.len());
    for position in 0..symbols.len() {
        if position % 2 == 0 {
            plaintext.push(top[position / 2]);
        } else {
            plaintext.push(bottom[position / 2]);
        }
    }

    Ok(plaintext)
}
