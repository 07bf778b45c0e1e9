//! Hash assembly and disassembly
//!
//! A hash is laid out as
//!
//! ```text
//! [pad] [guard] lottery digits(n0) sep digits(n1) sep ... digits(nk) [guard] [pad]
//! ```
//!
//! - `lottery` is `alphabet[Σ (n_i mod (i + 100)) mod |alphabet|]`
//! - before each number the alphabet is shuffled with the first
//!   `|alphabet|` characters of `lottery || salt || alphabet`, so every
//!   segment depends on all segments before it
//! - guards and padding only appear when the hash is shorter than `min_length`
//!
//! Decoding rebuilds the same shuffle sequence and then re-encodes the result;
//! a hash is only accepted if it reproduces byte for byte.

use log::debug;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::alphabet::Partition;
use crate::error::HashIdError;
use crate::numeral::{decode_number, encode_number};
use crate::params::*;
use crate::shuffle::shuffle_in_place;

/// User-facing configuration for a [`HashId`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HashIdData {
    /// Characters hashes are built from (at least 16 unique)
    pub alphabet: String,
    /// Arbitrary salt, may be empty
    pub salt: String,
    /// Minimum length of produced hashes
    pub min_length: usize,
}

impl HashIdData {
    /// Default alphabet, empty salt, no minimum length
    pub fn new() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            salt: String::new(),
            min_length: 0,
        }
    }
}

impl Default for HashIdData {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`HashId`]
#[derive(Debug, Clone, Default)]
pub struct HashIdBuilder {
    data: HashIdData,
}

impl HashIdBuilder {
    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.data.salt = salt.into();
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.data.alphabet = alphabet.into();
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.data.min_length = min_length;
        self
    }

    pub fn build(self) -> Result<HashId, HashIdError> {
        HashId::new(&self.data)
    }
}

/// Hashids encoder/decoder
///
/// Immutable once built. A single instance can be shared across threads;
/// every call works on its own copy of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashId {
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
    salt: Vec<char>,
    min_length: usize,
}

impl HashId {
    /// Build an encoder from `data`, partitioning and shuffling its alphabet
    pub fn new(data: &HashIdData) -> Result<Self, HashIdError> {
        let salt: Vec<char> = data.salt.chars().collect();
        let Partition {
            alphabet,
            separators,
            guards,
        } = Partition::new(&data.alphabet, &salt)?;

        debug!(
            "hashid configured: {} alphabet, {} separators, {} guards, min length {}",
            alphabet.len(),
            separators.len(),
            guards.len(),
            data.min_length
        );

        Ok(Self {
            alphabet,
            separators,
            guards,
            salt,
            min_length: data.min_length,
        })
    }

    /// Start building an encoder from the defaults
    pub fn builder() -> HashIdBuilder {
        HashIdBuilder::default()
    }

    /// Working alphabet (separators and guards removed, salt-shuffled)
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    pub fn guards(&self) -> &[char] {
        &self.guards
    }

    pub fn salt(&self) -> String {
        self.salt.iter().collect()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Encode a sequence of arbitrary-precision numbers
    pub fn encode_big(&self, numbers: &[BigUint]) -> Result<String, HashIdError> {
        if numbers.is_empty() {
            return Err(HashIdError::Input(
                "encoding empty array of numbers makes no sense".to_string(),
            ));
        }

        let numbers_hash = numbers_hash(numbers);
        let mut alphabet = self.alphabet.clone();
        let lottery = alphabet[numbers_hash % alphabet.len()];

        let mut out = Vec::with_capacity(self.min_length.max(numbers.len() * 8));
        out.push(lottery);

        let mut material = Vec::with_capacity(alphabet.len() + self.salt.len() + 1);
        for (i, number) in numbers.iter().enumerate() {
            self.step_shuffle(&mut alphabet, lottery, &mut material);
            let digits = encode_number(number, &alphabet);
            out.extend_from_slice(&digits);

            if i + 1 < numbers.len() {
                let index = separator_index(number, digits[0], i, self.separators.len());
                out.push(self.separators[index]);
            }
        }

        Ok(self.pad(out, alphabet, numbers_hash))
    }

    /// Decode a hash into arbitrary-precision numbers.
    ///
    /// The empty hash decodes to an empty sequence.
    pub fn decode_big(&self, hash: &str) -> Result<Vec<BigUint>, HashIdError> {
        let numbers = self.disassemble(hash)?;

        let reencoded = if numbers.is_empty() {
            String::new()
        } else {
            self.encode_big(&numbers)?
        };

        if reencoded != hash {
            debug!("rejecting {hash:?}: re-encoded as {reencoded:?}");
            return Err(HashIdError::Mismatch {
                hash: hash.to_string(),
                reencoded,
                numbers,
            });
        }

        Ok(numbers)
    }

    /// Encode a sequence of `u64`
    pub fn encode(&self, numbers: &[u64]) -> Result<String, HashIdError> {
        let numbers: Vec<BigUint> = numbers.iter().map(|&n| BigUint::from(n)).collect();
        self.encode_big(&numbers)
    }

    /// Decode a hash into `u64` values
    pub fn decode(&self, hash: &str) -> Result<Vec<u64>, HashIdError> {
        self.decode_big(hash)?
            .iter()
            .map(|n| {
                n.to_u64()
                    .ok_or_else(|| HashIdError::OutOfRange(format!("{n} does not fit in u64")))
            })
            .collect()
    }

    /// Encode a sequence of `i64`. Negative values are rejected.
    pub fn encode_i64(&self, numbers: &[i64]) -> Result<String, HashIdError> {
        let numbers = numbers
            .iter()
            .map(|&n| {
                u64::try_from(n)
                    .map(BigUint::from)
                    .map_err(|_| HashIdError::Input("negative number not supported".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.encode_big(&numbers)
    }

    /// Decode a hash into `i64` values
    pub fn decode_i64(&self, hash: &str) -> Result<Vec<i64>, HashIdError> {
        self.decode_big(hash)?
            .iter()
            .map(|n| {
                n.to_i64()
                    .ok_or_else(|| HashIdError::OutOfRange(format!("{n} does not fit in i64")))
            })
            .collect()
    }

    /// Encode a hex string, one number per hex digit
    pub fn encode_hex(&self, hex: &str) -> Result<String, HashIdError> {
        let numbers = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| u64::from(HEX_DIGIT_OFFSET + d))
                    .ok_or_else(|| HashIdError::Input("invalid hex digit".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.encode(&numbers)
    }

    /// Decode a hash produced by [`HashId::encode_hex`] back to lowercase hex
    pub fn decode_hex(&self, hash: &str) -> Result<String, HashIdError> {
        self.decode(hash)?
            .into_iter()
            .map(|n| {
                n.checked_sub(u64::from(HEX_DIGIT_OFFSET))
                    .filter(|d| *d < 16)
                    .and_then(|d| char::from_digit(d as u32, 16))
                    .ok_or_else(|| HashIdError::Input("invalid number".to_string()))
            })
            .collect()
    }

    /// Shuffle `alphabet` for the next number with `lottery || salt || alphabet`
    fn step_shuffle(&self, alphabet: &mut [char], lottery: char, material: &mut Vec<char>) {
        material.clear();
        material.push(lottery);
        material.extend_from_slice(&self.salt);
        material.extend_from_slice(alphabet);
        material.truncate(alphabet.len());
        shuffle_in_place(alphabet, material);
    }

    /// Add guards and alphabet padding until `out` reaches `min_length`
    fn pad(&self, mut out: Vec<char>, mut alphabet: Vec<char>, numbers_hash: usize) -> String {
        if out.len() < self.min_length {
            let index = (numbers_hash + out[0] as usize) % self.guards.len();
            out.insert(0, self.guards[index]);

            if out.len() < self.min_length {
                let index = (numbers_hash + out[2] as usize) % self.guards.len();
                out.push(self.guards[index]);
            }
        }

        let half = alphabet.len() / 2;
        while out.len() < self.min_length {
            let salt = alphabet.clone();
            shuffle_in_place(&mut alphabet, &salt);

            let mut padded = Vec::with_capacity(out.len() + alphabet.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.extend_from_slice(&out);
            padded.extend_from_slice(&alphabet[..half]);
            out = padded;

            let excess = out.len().saturating_sub(self.min_length);
            if excess > 0 {
                let start = excess / 2;
                out.truncate(start + self.min_length);
                out.drain(..start);
            }
        }

        out.into_iter().collect()
    }

    /// Split a hash into segments and decode them, without the re-encode check
    fn disassemble(&self, hash: &str) -> Result<Vec<BigUint>, HashIdError> {
        let chars: Vec<char> = hash.chars().collect();
        if chars.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(c) = chars.iter().find(|c| !self.is_known(**c)) {
            debug!("rejecting {hash:?}: unknown character {c:?}");
            return Err(HashIdError::Alphabet);
        }

        let parts: Vec<&[char]> = chars.split(|c| self.guards.contains(c)).collect();
        let body = match parts.len() {
            1 => parts[0],
            2 | 3 => parts[1],
            n => {
                debug!("rejecting {hash:?}: {} guards", n - 1);
                return Err(HashIdError::MalformedHash(format!(
                    "expected at most 2 guards, found {}",
                    n - 1
                )));
            }
        };

        let Some((&lottery, rest)) = body.split_first() else {
            return Err(HashIdError::MalformedHash(
                "missing lottery character".to_string(),
            ));
        };

        let mut alphabet = self.alphabet.clone();
        let mut material = Vec::with_capacity(alphabet.len() + self.salt.len() + 1);
        rest.split(|c| self.separators.contains(c))
            .map(|segment| {
                self.step_shuffle(&mut alphabet, lottery, &mut material);
                decode_number(segment, &alphabet)
            })
            .collect()
    }

    #[inline]
    fn is_known(&self, c: char) -> bool {
        self.alphabet.contains(&c) || self.separators.contains(&c) || self.guards.contains(&c)
    }
}

/// Offset added to each hex digit so `0` is never a bare zero
const HEX_DIGIT_OFFSET: u32 = 0x10;

/// Lottery checksum: `Σ (n_i mod (i + 100))`
fn numbers_hash(numbers: &[BigUint]) -> usize {
    numbers
        .iter()
        .enumerate()
        .map(|(i, n)| small_mod(n, i + NUMBERS_HASH_OFFSET))
        .sum()
}

/// Separator for the number at position `i`:
/// `(n mod (first_digit + i)) mod |separators|`
fn separator_index(number: &BigUint, first_digit: char, i: usize, separators: usize) -> usize {
    small_mod(number, first_digit as usize + i) % separators
}

/// `n mod m` for a small, non-zero modulus
#[inline]
fn small_mod(n: &BigUint, m: usize) -> usize {
    // the remainder is below m, so it always fits
    (n % BigUint::from(m)).to_usize().unwrap_or_default()
}
