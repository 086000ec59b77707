use crate::error::Error;
use crate::shuffle::consistent_shuffle;

/// Minimum number of unique characters a custom alphabet must provide.
pub const MIN_ALPHABET_LENGTH: usize = 16;

// Separator carve-out may consume up to 6 alphabet characters before
// the remaining-length check applies.
const MIN_ALPHABET_AFTER_SEPARATORS: usize = MIN_ALPHABET_LENGTH - 6;

/// The three disjoint character sets derived once at construction:
/// the working alphabet hashes are written in, the separators placed
/// between numbers, and the guards used for minimum-length padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub alphabet: Vec<char>,
    pub separators: Vec<char>,
    pub guards: Vec<char>,
}

impl Partition {
    /// Derives the partition from raw alphabet/separator strings and a
    /// (already trimmed) salt.
    ///
    /// Separators are drawn from the alphabet and removed from it, then
    /// both sets are shuffled with the salt. The separator pool is kept
    /// near a 3.5:1 alphabet:separator ratio, borrowing from or giving
    /// back to the alphabet as needed. Finally one guard per 12 alphabet
    /// characters is carved off the front of the alphabet, or off the
    /// separators when the alphabet is too small to give any up.
    pub fn new(alphabet: &str, separators: &str, salt: &[char]) -> Result<Self, Error> {
        if alphabet.trim().is_empty() {
            return Err(Error::BlankAlphabet);
        }
        if separators.trim().is_empty() {
            return Err(Error::BlankSeparators);
        }

        let mut alphabet = dedup_preserving_order(alphabet.chars());
        if alphabet.len() < MIN_ALPHABET_LENGTH {
            return Err(Error::AlphabetTooShort {
                unique: alphabet.len(),
                required: MIN_ALPHABET_LENGTH,
            });
        }

        // Separators may only be characters that exist in the alphabet,
        // and once chosen they are no longer available for hash digits.
        let mut separators =
            dedup_preserving_order(separators.chars().filter(|c| alphabet.contains(c)));
        alphabet.retain(|c| !separators.contains(c));

        if alphabet.len() < MIN_ALPHABET_AFTER_SEPARATORS {
            return Err(Error::AlphabetConsumedBySeparators {
                remaining: alphabet.len(),
                required: MIN_ALPHABET_AFTER_SEPARATORS,
            });
        }

        consistent_shuffle(&mut separators, salt);

        if separators.is_empty() || alphabet.len() * 2 > separators.len() * 7 {
            // Target one separator per 3.5 alphabet characters;
            // ceil(len / 3.5) == ceil(2 * len / 7), integer-exact.
            let mut target = (alphabet.len() * 2).div_ceil(7);
            if target == 1 {
                target = 2;
            }

            if target > separators.len() {
                let borrowed = target - separators.len();
                separators.extend(alphabet.drain(..borrowed));
            } else {
                separators.truncate(target);
            }
        }

        consistent_shuffle(&mut alphabet, salt);

        let guard_count = alphabet.len().div_ceil(12);
        let guards;
        if alphabet.len() < 3 {
            // Tiny alphabets cannot give up characters without
            // collapsing encoding capacity; take guards from the
            // separator pool instead.
            guards = separators.drain(..guard_count).collect();
        } else {
            guards = alphabet.drain(..guard_count).collect();
        }

        Ok(Self {
            alphabet,
            separators,
            guards,
        })
    }
}

fn dedup_preserving_order(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut out: Vec<char> = Vec::new();
    for c in chars {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
