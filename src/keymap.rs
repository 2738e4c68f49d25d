use crate::error::{CipherError, Result};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Total bijective mapping from alphabet symbol to alphabet symbol.
pub type SubstitutionKey = HashMap<char, char>;

/// Relative frequency of each observed symbol, values in `[0, 1]`.
pub type FrequencyTable = HashMap<char, f64>;

/// Map every element of a sequence through its image in `mapping`.
///
/// Lookup is strict: a symbol without an entry fails the whole call,
/// naming the offending symbol. This is the one substitution primitive
/// every monoalphabetic cipher routes through.
pub fn map_symbols<K, V>(sequence: &[K], mapping: &HashMap<K, V>) -> Result<Vec<V>>
where
    K: Eq + Hash + Display,
    V: Clone,
{
    if sequence.is_empty() {
        return Err(CipherError::EmptyInput);
    }
    if mapping.is_empty() {
        return Err(CipherError::MissingKey);
    }

    let mut images = Vec::with_capacity(sequence.len());
    for symbol in sequence {
        match mapping.get(symbol) {
            Some(image) => images.push(image.clone()),
            None => return Err(CipherError::UnmappedSymbol(symbol.to_string())),
        }
    }

    Ok(images)
}

/// Invert a bijective mapping, turning each `source -> image` entry into
/// `image -> source`. Fails when two sources share an image, since the
/// inverse would silently lose one of them.
pub fn invert<K, V>(mapping: &HashMap<K, V>) -> Result<HashMap<V, K>>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone + Display,
{
    if mapping.is_empty() {
        return Err(CipherError::MissingKey);
    }

    let mut inverse = HashMap::with_capacity(mapping.len());
    for (source, image) in mapping {
        if inverse.insert(image.clone(), source.clone()).is_some() {
            return Err(CipherError::MalformedKey(format!(
                "two symbols share the image {image}"
            )));
        }
    }

    Ok(inverse)
}

/// Relative frequency of each symbol in a sequence.
/// Frequencies of all observed symbols sum to 1.0.
pub fn frequencies<K>(sequence: &[K]) -> Result<HashMap<K, f64>>
where
    K: Eq + Hash + Clone,
{
    if sequence.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    let mut table: HashMap<K, f64> = HashMap::new();
    for symbol in sequence {
        *table.entry(symbol.clone()).or_insert(0.0) += 1.0;
    }

    let total = sequence.len() as f64;
    for value in table.values_mut() {
        *value /= total;
    }

    Ok(table)
}

/// Raw distance of an observed value from the expected one.
pub fn absolute_error(observed: f64, expected: f64) -> f64 {
    (observed - expected).abs()
}

/// Distance from the expected value, relative to it.
pub fn relative_error(observed: f64, expected: f64) -> f64 {
    absolute_error(observed, expected) / expected
}

/// Relative error expressed as a percentage.
pub fn percentage_error(observed: f64, expected: f64) -> f64 {
    relative_error(observed, expected) * 100.0
}
