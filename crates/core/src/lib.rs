//! # Hashids Core Algorithm
//!
//! Salted, reversible obfuscation of integer sequences into short strings,
//! for exposing database ids in URLs without leaking their order.
//!
//! **Not encryption.** Anyone who knows the algorithm and can guess the salt
//! can decode a hash.
//!
//! ## Features
//!
//! - **Arbitrary precision**: numbers are `BigUint`; `u64`/`i64` are thin
//!   range-checked adapters
//! - **Self-checking decode**: every decoded result is re-encoded and must
//!   reproduce the input, so a wrong salt or alphabet never yields numbers
//! - **Compatible**: produces the same hashes as the other hashids ports for
//!   the same alphabet, salt and minimum length
//!
//! ## Hash Layout
//!
//! ```text
//! [pad] [guard] lottery digits(n0) sep digits(n1) ... digits(nk) [guard] [pad]
//! ```
//!
//! Guards and padding are only added to reach the configured minimum length.
//!
//! ## Example
//!
//! ```rust
//! use hashids_core::HashId;
//!
//! let ids = HashId::builder().salt("this is my salt").build().unwrap();
//!
//! let hash = ids.encode(&[1, 2, 3]).unwrap();
//! assert_eq!(ids.decode(&hash).unwrap(), vec![1, 2, 3]);
//!
//! // A different salt rejects the hash instead of returning other numbers
//! let other = HashId::builder().salt("another salt").build().unwrap();
//! assert!(other.decode(&hash).is_err());
//! ```
//!
//! ## Serde
//!
//! With the `serde` feature, [`HashIdData`] can be read from configuration
//! files; missing fields take their defaults.

mod alphabet;
mod error;
mod hashid;
mod numeral;
mod params;
mod shuffle;

pub use error::HashIdError;
pub use hashid::{HashId, HashIdBuilder, HashIdData};
pub use num_bigint::BigUint;
pub use numeral::{decode_number, encode_number};
pub use params::*;
pub use shuffle::{shuffle, shuffle_in_place};
