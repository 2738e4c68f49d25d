//! Rotation (ROT-X) ciphers, the Caesar cipher being the offset-3
//! preset. Letters rotate around the cipherwheel; everything else is
//! passed through unchanged rather than stripped, so punctuation and
//! spacing survive this cipher.

use crate::alphabet;
use crate::error::{CipherError, Result};

/// Offset of the canonical Caesar cipher.
pub const CAESAR_OFFSET: i32 = 3;

/// Rotate every letter by a fixed signed offset. A negative offset
/// undoes the corresponding positive one, so decryption is
/// `rotate_text(ciphertext, -offset)`.
pub fn rotate_text(text: &str, offset: i32) -> Result<String> {
    if text.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    if offset.rem_euclid(alphabet::WIDTH as i32) == 0 {
        return Err(CipherError::DegenerateOffset(offset));
    }

    let mut rotated = String::with_capacity(text.len());
    for symbol in text.chars() {
        match alphabet::index_of(symbol.to_ascii_uppercase()) {
            Some(index) => rotated.push(alphabet::symbol_at(alphabet::rotate(index, offset)?)),
            None => rotated.push(symbol),
        }
    }

    Ok(rotated)
}

/// Encipher with the classic offset of 3.
pub fn caesar_encrypt(plaintext: &str) -> Result<String> {
    rotate_text(plaintext, CAESAR_OFFSET)
}

/// Decipher a Caesar ciphertext.
pub fn caesar_decrypt(ciphertext: &str) -> Result<String> {
    rotate_text(ciphertext, -CAESAR_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_book_vector() {
        assert_eq!(caesar_encrypt("VENIVIDIVICI").unwrap(), "YHQLYLGLYLFL");
        assert_eq!(caesar_decrypt("YHQLYLGLYLFL").unwrap(), "VENIVIDIVICI");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(
            rotate_text("VENI, VIDI, VICI", 3).unwrap(),
            "YHQL, YLGL, YLFL"
        );
    }

    #[test]
    fn test_lowercase_is_uppercased() {
        assert_eq!(rotate_text("veni", 3).unwrap(), "YHQL");
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(rotate_text("XYZ", 3).unwrap(), "ABC");
        assert_eq!(rotate_text("ABC", -3).unwrap(), "XYZ");
    }

    #[test]
    fn test_offsets_beyond_width_reduce() {
        assert_eq!(
            rotate_text("HELLO", 29).unwrap(),
            rotate_text("HELLO", 3).unwrap()
        );
    }

    #[test]
    fn test_degenerate_offsets_rejected() {
        assert_eq!(rotate_text("ABC", 0), Err(CipherError::DegenerateOffset(0)));
        assert_eq!(
            rotate_text("ABC", 52),
            Err(CipherError::DegenerateOffset(52))
        );
        assert_eq!(
            rotate_text("ABC", -26),
            Err(CipherError::DegenerateOffset(-26))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rotate_text("", 3), Err(CipherError::EmptyInput));
    }
}
