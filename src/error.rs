use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CipherError {
    #[error("input is empty or contains no alphabetic characters")]
    EmptyInput,

    #[error("rotation offset {0} is a multiple of the alphabet width and would leave the text unchanged")]
    DegenerateOffset(i32),

    #[error("symbol {0:?} has no entry in the substitution key")]
    UnmappedSymbol(String),

    #[error("token {0:?} has no entry in the homophonic key")]
    UnknownToken(String),

    #[error("decryption requires key material but none was supplied")]
    MissingKey,

    #[error("substitution key is not a bijection: {0}")]
    MalformedKey(String),

    #[error("symbol range supplies {available} distinct tokens but the key needs {needed}")]
    SymbolRangeExhausted { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
