//! Hex-string adapter for hashid encoding.
//!
//! Maps hex digit strings (for example MongoDB ObjectIds) onto integer
//! sequences and delegates to `hashid-core`. Hex input is split into
//! groups of at most 12 digits, and every group is prefixed with a `1`
//! sentinel digit before conversion so that leading zeros survive the
//! round trip.

use hashid_core::{Hashid, Hashids};

const MAX_GROUP_DIGITS: usize = 12;

/// Hex encode/decode operations layered over a configured [`Hashids`].
pub trait HexCodec {
    /// Encodes a hex digit string into a hashid.
    ///
    /// Returns an empty hashid when the input is blank or contains a
    /// non-hex character.
    fn encode_hex(&self, hex: &str) -> Hashid;

    /// Decodes a hashid produced by [`encode_hex`][Self::encode_hex]
    /// back into the hex digit string, uppercased.
    ///
    /// Returns an empty string when the hash does not decode.
    fn decode_hex(&self, hash: &str) -> String;
}

impl HexCodec for Hashids {
    fn encode_hex(&self, hex: &str) -> Hashid {
        match hex_to_numbers(hex) {
            Some(numbers) => self.encode(&numbers),
            None => self.encode(&[]),
        }
    }

    fn decode_hex(&self, hash: &str) -> String {
        let mut hex = String::new();
        for number in self.decode(hash) {
            let group = format!("{number:X}");
            // Drop the leading `1` sentinel added at encode time.
            hex.push_str(&group[1..]);
        }
        hex
    }
}

fn hex_to_numbers(hex: &str) -> Option<Vec<u64>> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    // All-hex input is ASCII, so byte chunks are character chunks.
    let mut numbers = Vec::with_capacity(hex.len().div_ceil(MAX_GROUP_DIGITS));
    for group in hex.as_bytes().chunks(MAX_GROUP_DIGITS) {
        // 1 sentinel + 12 hex digits is 52 bits, comfortably in u64.
        let mut number: u64 = 1;
        for &digit in group {
            number = number * 16 + (digit as char).to_digit(16)? as u64;
        }
        numbers.push(number);
    }

    Some(numbers)
}
