use crate::alphabet::Partition;
use crate::error::{Error, SingleDecodeError};
use crate::hashid::Hashid;
use crate::shuffle::consistent_shuffle;
use typed_builder::TypedBuilder;

/// Default alphabet: lowercase, uppercase, digits.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Default separator characters, chosen to keep common curse words out
/// of generated hashes.
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// Configures a hashids encoder/decoder instance.
#[derive(Debug, Clone, TypedBuilder)]
pub struct HashidsSettings {
    /// Arbitrary string parameterizing every shuffle. Hashids produced
    /// under different salts do not decode under each other.
    ///
    /// Leading and trailing whitespace is ignored.
    #[builder(default, setter(into))]
    pub salt: String,
    /// Minimum length of encoded output; shorter hashes are padded
    /// with guard and idle-alphabet characters.
    #[builder(default = 0)]
    pub min_hash_length: usize,
    /// Characters hashes are written in. Must contain at least 16
    /// unique characters.
    #[builder(default = DEFAULT_ALPHABET.to_string(), setter(into))]
    pub alphabet: String,
    /// Characters placed between encoded numbers. Only characters also
    /// present in the alphabet are used.
    #[builder(default = DEFAULT_SEPARATORS.to_string(), setter(into))]
    pub separators: String,
}

/// A configured hashids encoder/decoder.
///
/// The configuration is immutable after construction; every call works
/// on a private copy of the alphabet, so a shared `&Hashids` can be
/// used from any number of threads without synchronization.
///
/// # Examples
///
/// ```
/// use hashid_core::{Hashids, HashidsSettings};
///
/// let settings = HashidsSettings::builder()
///     .salt("this is my salt")
///     .build();
/// let hashids = Hashids::new(settings).unwrap();
///
/// let hash = hashids.encode(&[1]);
/// assert_eq!(hash, "NV");
/// assert_eq!(hashids.decode(hash.as_str()), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct Hashids {
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
    salt: Vec<char>,
    min_hash_length: usize,
}

impl Hashids {
    /// Creates an encoder/decoder from the given settings.
    ///
    /// Fails when the alphabet or separators are blank, when the
    /// alphabet has fewer than 16 unique characters, or when removing
    /// separators leaves it with fewer than 10.
    pub fn new(settings: HashidsSettings) -> Result<Self, Error> {
        let salt: Vec<char> = settings.salt.trim().chars().collect();
        let partition = Partition::new(&settings.alphabet, &settings.separators, &salt)?;

        Ok(Self {
            alphabet: partition.alphabet,
            separators: partition.separators,
            guards: partition.guards,
            salt,
            min_hash_length: settings.min_hash_length,
        })
    }

    /// Encodes the numbers into a hashid.
    ///
    /// The order of the numbers is significant and preserved by
    /// [`decode`][Self::decode]. Empty input yields an empty hashid.
    pub fn encode(&self, numbers: &[u64]) -> Hashid {
        let chars = self.encode_to_chars(numbers);
        if chars.is_empty() {
            Hashid::empty()
        } else {
            Hashid::new(chars.into_iter().collect::<String>())
        }
    }

    /// Decodes a hashid back into the numbers it was built from.
    ///
    /// Returns an empty vector for blank input, structurally invalid
    /// input, or hashes produced under a different salt, alphabet, or
    /// minimum length. Malformed input never panics.
    pub fn decode(&self, hash: &str) -> Vec<u64> {
        self.decode_checked(hash).unwrap_or_default()
    }

    /// Decodes a hashid expected to hold exactly one number.
    pub fn decode_single(&self, hash: &str) -> Result<u64, SingleDecodeError> {
        let numbers = self.decode(hash);
        match numbers.as_slice() {
            [] => Err(SingleDecodeError::NoResult),
            [number] => Ok(*number),
            _ => Err(SingleDecodeError::MultipleResults),
        }
    }

    /// Like [`decode_single`][Self::decode_single], collapsing both
    /// failure kinds into `None`.
    pub fn try_decode_single(&self, hash: &str) -> Option<u64> {
        match self.decode(hash).as_slice() {
            [number] => Some(*number),
            _ => None,
        }
    }

    fn encode_to_chars(&self, numbers: &[u64]) -> Vec<char> {
        if numbers.is_empty() {
            return Vec::new();
        }

        let alphabet_len = self.alphabet.len();

        // Cheap order- and value-sensitive checksum seeding the lottery.
        let mut numbers_hash: u64 = 0;
        for (i, &number) in numbers.iter().enumerate() {
            numbers_hash += number % (i as u64 + 100);
        }

        let mut alphabet = self.alphabet.clone();
        let lottery = alphabet[(numbers_hash % alphabet_len as u64) as usize];

        let mut result = Vec::with_capacity(self.min_hash_length.max(numbers.len() * 2));
        result.push(lottery);

        let mut shuffle_salt = vec!['\0'; alphabet_len];
        let mut digits: Vec<char> = Vec::new();

        for (i, &number) in numbers.iter().enumerate() {
            self.fill_shuffle_salt(&mut shuffle_salt, lottery, &alphabet);
            consistent_shuffle(&mut alphabet, &shuffle_salt);

            // Positional digits come out least-significant first.
            digits.clear();
            let mut remaining = number;
            loop {
                digits.push(alphabet[(remaining % alphabet_len as u64) as usize]);
                remaining /= alphabet_len as u64;
                if remaining == 0 {
                    break;
                }
            }
            result.extend(digits.iter().rev());

            if i + 1 < numbers.len() {
                let leading_digit = digits[digits.len() - 1] as u64;
                let key = number % (leading_digit + i as u64);
                let index = (key % self.separators.len() as u64) as usize;
                result.push(self.separators[index]);
            }
        }

        if result.len() < self.min_hash_length {
            let guard_count = self.guards.len() as u64;

            let index = ((numbers_hash + result[0] as u64) % guard_count) as usize;
            result.insert(0, self.guards[index]);

            if result.len() < self.min_hash_length {
                let index = ((numbers_hash + result[2] as u64) % guard_count) as usize;
                result.push(self.guards[index]);
            }
        }

        // Idle-alphabet padding: grow by a full reshuffled alphabet per
        // pass, then trim symmetrically down to the exact minimum.
        let half = alphabet_len / 2;
        while result.len() < self.min_hash_length {
            let shuffle_copy = alphabet.clone();
            consistent_shuffle(&mut alphabet, &shuffle_copy);

            let mut padded = Vec::with_capacity(result.len() + alphabet_len);
            padded.extend_from_slice(&alphabet[half..]);
            padded.append(&mut result);
            padded.extend_from_slice(&alphabet[..half]);
            result = padded;

            let excess = result.len().saturating_sub(self.min_hash_length);
            if excess > 0 {
                result.drain(..excess / 2);
                result.truncate(self.min_hash_length);
            }
        }

        result
    }

    fn decode_checked(&self, hash: &str) -> Option<Vec<u64>> {
        if hash.trim().is_empty() {
            return None;
        }

        let chars: Vec<char> = hash.chars().collect();

        // Guards only appear around the payload; with two or three
        // fragments the payload is in the middle, otherwise it is the
        // whole string.
        let fragments = split_discarding_empty(&chars, &self.guards);
        let payload = match fragments.len() {
            0 => return None,
            2 | 3 => fragments[1],
            _ => fragments[0],
        };

        let (&lottery, rest) = payload.split_first()?;
        let sub_hashes = split_discarding_empty(rest, &self.separators);

        let alphabet_len = self.alphabet.len();
        let mut alphabet = self.alphabet.clone();
        let mut shuffle_salt = vec!['\0'; alphabet_len];

        let mut numbers = Vec::with_capacity(sub_hashes.len());
        for sub_hash in sub_hashes {
            // Identical per-position alphabet reconstruction as encode.
            self.fill_shuffle_salt(&mut shuffle_salt, lottery, &alphabet);
            consistent_shuffle(&mut alphabet, &shuffle_salt);

            let mut number: u64 = 0;
            for c in sub_hash {
                let position = alphabet.iter().position(|a| a == c)? as u64;
                number = number
                    .checked_mul(alphabet_len as u64)?
                    .checked_add(position)?;
            }
            numbers.push(number);
        }

        // Re-encode and compare to reject hashes made under different
        // parameters; such input can parse structurally but will not
        // round-trip.
        if self.encode(&numbers) == hash {
            Some(numbers)
        } else {
            None
        }
    }

    /// Fills the per-number shuffle salt: the lottery character, then
    /// the configuration salt capped at `alphabet_len - 1` characters,
    /// then current alphabet characters as filler so the shuffle input
    /// length stays constant.
    ///
    /// The filler offset deliberately uses the uncapped salt length;
    /// decoders must rebuild the exact same buffer to stay
    /// bit-compatible with existing hashes.
    fn fill_shuffle_salt(&self, buffer: &mut [char], lottery: char, alphabet: &[char]) {
        let alphabet_len = alphabet.len();

        buffer[0] = lottery;
        let salt_take = self.salt.len().min(alphabet_len - 1);
        buffer[1..1 + salt_take].copy_from_slice(&self.salt[..salt_take]);

        let filler_start = 1 + self.salt.len();
        if filler_start < alphabet_len {
            let filler = alphabet_len - filler_start;
            buffer[filler_start..].copy_from_slice(&alphabet[..filler]);
        }
    }
}

fn split_discarding_empty<'a>(chars: &'a [char], delimiters: &[char]) -> Vec<&'a [char]> {
    chars
        .split(|c| delimiters.contains(c))
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
