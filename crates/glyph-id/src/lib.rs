//! Cryptographically-random identifier primitives.
//!
//! Two id flavors, both drawn from the platform CSPRNG:
//! - [`ShortId`]: a compact string over a fixed 64-symbol alphabet,
//!   mapped byte-per-character without modulo bias
//! - [`UuidV4`]: an RFC 4122 version-4 UUID in canonical hyphenated form
//!
//! The random source is an injected capability ([`RandomSource`]), so
//! tests can substitute a deterministic source while production code
//! defaults to [`OsEntropy`].

mod alphabet;
mod entropy;
pub mod error;
mod generator;
mod hex;
mod short_id;
mod uuid;

pub use alphabet::ALPHABET;
pub use entropy::{OsEntropy, RandomSource};
pub use error::Error;
pub use generator::Generator;
pub use hex::HEX;
pub use short_id::{
    short_id, short_id_with_length, ShortId, ShortIdGenerator, ShortIdSettings, DEFAULT_LENGTH,
};
pub use uuid::{uuid_v4, UuidGenerator, UuidV4};
