//! Monoalphabetic substitution ciphers: one fixed cipher alphabet for
//! the whole message, which is what makes the family vulnerable to
//! frequency analysis.

pub mod homophonic;
pub mod keyphrase;
pub mod pairing;
pub mod reflection;
pub mod rotation;
