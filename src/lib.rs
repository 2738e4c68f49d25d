//! Cipherwheel - Classical Cipher Library
//!
//! Implementations of the cipher constructions that carried secrets
//! before computers did: a rail-fence transposition, the monoalphabetic
//! substitution family (random pairing, rotation, keyphrase, Atbash
//! reflection, homophonic), the polyalphabetic family (running-key and
//! one-time pad), and a sketch of modular-exponentiation key agreement.
//!
//! Every cipher here except the one-time pad is broken, and is included
//! *because* it is broken: the point is faithful reproduction of the
//! historical constructions, quirks included, not security. Nothing in
//! this crate is fit for protecting real data.
//!
//! ## Design
//!
//! - The working alphabet is the 26 uppercase Latin letters; texts are
//!   normalized (uppercased, stripped of non-letters) on the way in,
//!   except where a cipher documents otherwise.
//! - All substitution ciphers route through one generic mapping
//!   primitive ([`keymap::map_symbols`]); decryption keys are derived by
//!   inverting encryption keys where the two differ.
//! - Key-generating operations take an injected `rand` generator, so
//!   tests can seed them. Where unpredictability is load-bearing (the
//!   one-time pad, the exchange secret) the generator must additionally
//!   be a `CryptoRng`.
//! - Generated keys are returned to the caller and never retained;
//!   persisting or destroying them is the caller's responsibility.
//!
//! ## Example
//!
//! ```
//! use cipherwheel::mono::rotation;
//! use cipherwheel::transposition;
//!
//! let ciphertext = rotation::caesar_encrypt("VENIVIDIVICI")?;
//! assert_eq!(ciphertext, "YHQLYLGLYLFL");
//! assert_eq!(rotation::caesar_decrypt(&ciphertext)?, "VENIVIDIVICI");
//!
//! let fenced = transposition::encrypt("WEAREDISCOVERED")?;
//! assert_eq!(transposition::decrypt(&fenced)?, "WEAREDISCOVERED");
//! # Ok::<(), cipherwheel::CipherError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod exchange;
pub mod keymap;
pub mod mono;
pub mod poly;
pub mod set;
pub mod transposition;

pub use error::{CipherError, Result};
pub use keymap::{FrequencyTable, SubstitutionKey};
pub use mono::homophonic::HomophonicKey;
pub use set::SymbolSet;
