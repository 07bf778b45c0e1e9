//! Hashids Algorithm Parameters
//!
//! These values are shared by every implementation of the scheme; changing
//! any of them changes every hash produced.

/// Default alphabet (62 characters)
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Characters preferred as separators, in priority order
pub const DEFAULT_SEPARATORS: &str = "cfhistuCFHISTU";

/// Minimum number of unique characters an alphabet must contain
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Target ratio of alphabet characters per separator
pub const SEPARATOR_DIV: f64 = 3.5;

/// Alphabet characters per guard
pub const GUARD_DIV: f64 = 12.0;

/// Offset of the per-position modulus in the lottery checksum (`n mod (i + 100)`)
pub const NUMBERS_HASH_OFFSET: usize = 100;
