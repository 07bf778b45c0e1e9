//! Positional numeral codec over an arbitrary alphabet
//!
//! The base is the alphabet length; digit `k` is `alphabet[k]`. Values are
//! `BigUint`, so there is no upper bound on magnitude.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::error::HashIdError;

/// Encode `number` as most-significant-first digits of `alphabet`.
/// Zero encodes to the single digit `alphabet[0]`.
pub fn encode_number(number: &BigUint, alphabet: &[char]) -> Vec<char> {
    let base = BigUint::from(alphabet.len());
    let mut digits = Vec::new();
    let mut value = number.clone();

    loop {
        let (quotient, remainder) = value.div_rem(&base);
        // remainder < alphabet.len(), so it always fits in usize
        let index = remainder.to_usize().unwrap_or_default();
        digits.push(alphabet[index]);
        value = quotient;
        if value.is_zero() {
            break;
        }
    }

    digits.reverse();
    digits
}

/// Decode most-significant-first `digits` of `alphabet` back to a number
pub fn decode_number(digits: &[char], alphabet: &[char]) -> Result<BigUint, HashIdError> {
    let base = BigUint::from(alphabet.len());
    let mut value = BigUint::zero();

    for digit in digits {
        let index = alphabet
            .iter()
            .position(|c| c == digit)
            .ok_or(HashIdError::Alphabet)?;
        value = value * &base + BigUint::from(index);
    }

    Ok(value)
}
