//! Hashids Library
//!
//! Obfuscate database ids as short, salted strings and turn them back.
//!
//! # Overview
//!
//! Hashids maps an ordered list of non-negative integers (of any size) to a
//! short string such as `o2fXhV`, and decodes it again for whoever holds the
//! same alphabet and salt. It hides sequential structure; it is not
//! encryption.
//!
//! # Example
//!
//! ```rust
//! use hashids::codec::HashId;
//!
//! let ids = HashId::builder().salt("my salt").min_length(8).build().unwrap();
//!
//! let hash = ids.encode(&[42, 7]).unwrap();
//! assert!(hash.len() >= 8);
//! assert_eq!(ids.decode(&hash).unwrap(), vec![42, 7]);
//! ```

// Re-export the core algorithm
pub use hashids_core as codec;

pub mod config;

// Convenience re-exports
pub use codec::{BigUint, HashId, HashIdData, HashIdError};
pub use config::{Config, ConfigError};
