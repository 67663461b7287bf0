//! The 64-symbol id alphabet and its byte-mapping table.

/// URL-safe alphabet: `A-Z`, `a-z`, `0-9`, `_`, `-`.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Maps every byte value to one alphabet character.
///
/// 256 is an exact multiple of 64, so masking the low six bits partitions
/// the byte space evenly across the alphabet. Every symbol covers exactly
/// four byte values, which keeps the mapping free of modulo bias.
pub(crate) static BYTE_TO_CHAR: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = ALPHABET[i & 63];
        i += 1;
    }
    table
}
