//! Reversible integer-to-string obfuscation (hashids).
//!
//! This crate turns sequences of non-negative integers into short,
//! shuffled, salt-dependent strings and back again, without any lookup
//! table or stored state. It is meant for hiding sequential database
//! ids in user-facing URLs, not for cryptographic protection.

mod alphabet;
pub mod error;
mod hashid;
mod hashids;
mod shuffle;

pub use error::{Error, SingleDecodeError};
pub use hashid::Hashid;
pub use hashids::{Hashids, HashidsSettings, DEFAULT_ALPHABET, DEFAULT_SEPARATORS};
