use thiserror::Error;

/// Errors returned by hashids construction.
///
/// These are configuration errors: the caller can only recover by
/// building a new instance with different parameters. Malformed hashes
/// at decode time are not errors; they yield empty results instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("alphabet must not be empty or whitespace")]
    BlankAlphabet,
    #[error("alphabet must contain at least {required} unique characters, got {unique}")]
    AlphabetTooShort { unique: usize, required: usize },
    #[error(
        "alphabet must keep at least {required} characters after separators are removed, got {remaining}"
    )]
    AlphabetConsumedBySeparators { remaining: usize, required: usize },
    #[error("separators must not be empty or whitespace")]
    BlankSeparators,
}

/// Outcomes of decoding a hash that is expected to hold exactly one number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SingleDecodeError {
    #[error("the hash yielded no result")]
    NoResult,
    #[error("the hash yielded more than one result")]
    MultipleResults,
}
