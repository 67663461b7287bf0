//! UTF-8 text↔byte helpers.
//!
//! Thin wrappers over the standard UTF-8 primitives: byte-length
//! computation, encoding, one-shot lossy decoding, and a streaming
//! decoder ([`Utf8Stream`]) for input that arrives in chunks.

mod stream;
mod utf8;

pub use stream::Utf8Stream;
pub use utf8::{byte_length, decode, encode};
