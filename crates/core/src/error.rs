//! Error type shared by construction, encoding and decoding

use core::fmt;

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashIdError {
    /// The configuration cannot produce a usable alphabet
    #[error("{0}")]
    Config(String),

    /// Encode was called with input it cannot represent
    #[error("{0}")]
    Input(String),

    /// The hash contains a character outside alphabet, separators and guards
    #[error("alphabet used for hash was different")]
    Alphabet,

    /// Guards appear away from the edges, or no lottery character is left
    #[error("malformed hash: {0}")]
    MalformedHash(String),

    /// The decoded numbers do not re-encode to the input hash
    #[error(
        "mismatch between encode and decode: {hash} start {reencoded} re-encoded. result: {}",
        NumberList(.numbers)
    )]
    Mismatch {
        hash: String,
        reencoded: String,
        numbers: Vec<BigUint>,
    },

    /// A decoded number does not fit the requested fixed-width type
    #[error("{0}")]
    OutOfRange(String),
}

/// Formats numbers as `[a b c]`
struct NumberList<'a>(&'a [BigUint]);

impl fmt::Display for NumberList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n}")?;
        }
        f.write_str("]")
    }
}
