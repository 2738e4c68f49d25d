//! One-time pad: the running-key cipher under a uniformly random key
//! exactly as long as the plaintext, used once and never again. The
//! pad is the only key material in this crate whose unpredictability is
//! load-bearing, so generation demands a `CryptoRng` source — pass
//! `rand::rngs::OsRng` in production, a seeded `StdRng` in tests.
//!
//! The generated pad is returned to the caller and nowhere else;
//! safekeeping and destruction are the caller's problem, as they were
//! for the historical pads.

use crate::alphabet;
use crate::error::{CipherError, Result};
use crate::poly::running_key;
use rand::{CryptoRng, Rng, RngCore};

/// Generate a pad of uniformly random alphabet symbols.
pub fn generate_pad<R: RngCore + CryptoRng>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| alphabet::symbol_at(rng.gen_range(0..alphabet::WIDTH)))
        .collect()
}

/// Encipher with a fresh pad of exactly normalized-plaintext length.
/// Returns the ciphertext together with the pad.
pub fn encrypt<R: RngCore + CryptoRng>(plaintext: &str, rng: &mut R) -> Result<(String, String)> {
    let plaintext = alphabet::normalize(plaintext)?;
    let pad = generate_pad(plaintext.chars().count(), rng);
    let ciphertext = running_key::encrypt(&plaintext, &pad)?;
    Ok((ciphertext, pad))
}

/// Decipher with the pad the message was enciphered under.
pub fn decrypt(ciphertext: &str, pad: &str) -> Result<String> {
    if pad.is_empty() {
        return Err(CipherError::MissingKey);
    }
    running_key::decrypt(ciphertext, pad)
}
