//! Two-step modular-exponentiation key agreement, the Diffie–Hellman
//! construction in its original form. Each party raises a public base
//! to a private secret modulo a public modulus, swaps the results, and
//! raises the peer's value to the same secret; both arrive at the same
//! shared number without it ever crossing the channel.
//!
//! This is a sketch of the arithmetic, not a protocol: nothing checks
//! that the modulus is prime or the base a primitive root, there is no
//! negotiation, and the exponentiation is not constant-time.

use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// A party's half of the exchange: the private secret to keep, and the
/// shared value to send to the peer.
#[derive(Debug, Clone)]
pub struct Initiation {
    pub secret: BigUint,
    pub shared: BigUint,
}

/// Step one: draw a private secret below the modulus and compute
/// `base^secret mod modulus` for the peer.
pub fn initiate<R: RngCore + CryptoRng>(
    base: &BigUint,
    modulus: &BigUint,
    rng: &mut R,
) -> Initiation {
    let secret = rng.gen_biguint_below(modulus);
    let shared = base.modpow(&secret, modulus);
    Initiation { secret, shared }
}

/// Step two: combine the peer's shared value with the local secret,
/// yielding `peer_shared^secret mod modulus` — the agreed number.
pub fn derive(peer_shared: &BigUint, secret: &BigUint, modulus: &BigUint) -> BigUint {
    peer_shared.modpow(secret, modulus)
}
