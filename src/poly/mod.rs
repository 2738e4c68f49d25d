//! Polyalphabetic substitution ciphers: the cipher alphabet changes
//! from position to position under the control of a key, which is what
//! defeats single-pass frequency analysis.

pub mod one_time_pad;
pub mod running_key;
