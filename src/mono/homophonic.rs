//! Homophonic substitution: each plaintext symbol owns a pool of
//! distinct numeric tokens sized in proportion to the symbol's
//! frequency, and every occurrence is enciphered as a uniformly chosen
//! member of its pool. Frequent letters spread across many tokens, which
//! flattens the ciphertext's unigram distribution against naive
//! frequency analysis (higher-order analysis still bites).

use crate::alphabet;
use crate::error::{CipherError, Result};
use crate::keymap::{self, FrequencyTable};
use crate::set::SymbolSet;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every symbol gets at least this many homophones, so even the rarest
/// letter never maps to a single token.
pub const MIN_HOMOPHONES: usize = 2;

/// One-to-many key from symbol to token pool, with the many-to-one
/// inverse kept alongside. Token pools of different symbols are
/// disjoint; every issued token decodes to exactly the symbol that
/// generated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomophonicKey {
    homophones: HashMap<char, Vec<String>>,
    inverse: HashMap<String, char>,
}

impl HomophonicKey {
    /// Token pool assigned to a symbol, if the symbol occurred in the
    /// text the key was generated from.
    pub fn homophones_for(&self, symbol: char) -> Option<&[String]> {
        self.homophones.get(&symbol).map(Vec::as_slice)
    }

    /// The symbol a token decodes to.
    pub fn symbol_for(&self, token: &str) -> Option<char> {
        self.inverse.get(token).copied()
    }

    /// Total number of tokens issued across all symbols.
    pub fn token_count(&self) -> usize {
        self.inverse.len()
    }
}

/// Number of homophones a symbol earns from its relative frequency.
fn homophone_count(frequency: f64) -> usize {
    ((frequency * 100.0).ceil() as usize).max(MIN_HOMOPHONES)
}

/// Build a homophonic key from a frequency table. Tokens are decimal
/// strings drawn uniformly from `0..=symbol_range`; collisions are
/// rejected against the set of already-issued tokens. Fails up front if
/// the range cannot supply enough distinct tokens.
pub fn generate_key<R: Rng + ?Sized>(
    table: &FrequencyTable,
    symbol_range: usize,
    rng: &mut R,
) -> Result<HomophonicKey> {
    if table.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let needed: usize = table.values().map(|f| homophone_count(*f)).sum();
    let available = symbol_range + 1;
    if needed > available {
        return Err(CipherError::SymbolRangeExhausted { needed, available });
    }

    let mut homophones = HashMap::with_capacity(table.len());
    let mut inverse = HashMap::with_capacity(needed);
    let mut issued: SymbolSet<String> = SymbolSet::new();

    for (&symbol, &frequency) in table {
        let count = homophone_count(frequency);
        let mut pool = Vec::with_capacity(count);
        for _ in 0..count {
            let token = loop {
                let candidate = rng.gen_range(0..=symbol_range).to_string();
                if !issued.contains(&candidate) {
                    break candidate;
                }
            };
            issued.insert(token.clone());
            inverse.insert(token.clone(), symbol);
            pool.push(token);
        }
        homophones.insert(symbol, pool);
    }

    Ok(HomophonicKey { homophones, inverse })
}

/// Normalize the plaintext, derive its frequency table, generate a key,
/// and emit one uniformly chosen homophone per symbol, space-separated.
/// The key is returned to the caller; it is not retained.
pub fn encrypt<R: Rng + ?Sized>(
    plaintext: &str,
    symbol_range: usize,
    rng: &mut R,
) -> Result<(String, HomophonicKey)> {
    let plaintext = alphabet::normalize(plaintext)?;
    let symbols: Vec<char> = plaintext.chars().collect();

    let table = keymap::frequencies(&symbols)?;
    let key = generate_key(&table, symbol_range, rng)?;

    let mut tokens = Vec::with_capacity(symbols.len());
    for symbol in &symbols {
        let pool = key
            .homophones
            .get(symbol)
            .ok_or_else(|| CipherError::UnmappedSymbol(symbol.to_string()))?;
        let choice = pool
            .choose(rng)
            .ok_or_else(|| CipherError::MalformedKey(format!("symbol {symbol} has no homophones")))?;
        tokens.push(choice.clone());
    }

    Ok((tokens.join(" "), key))
}

/// Map each whitespace-separated token back through the inverse table.
pub fn decrypt(ciphertext: &str, key: &HomophonicKey) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    if key.inverse.is_empty() {
        return Err(CipherError::MissingKey);
    }

    let mut plaintext = String::new();
    for token in ciphertext.split_whitespace() {
        match key.inverse.get(token) {
            Some(symbol) => plaintext.push(*symbol),
            None => return Err(CipherError::UnknownToken(token.to_string())),
        }
    }

    if plaintext.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    Ok(plaintext)
}
