//! One-shot UTF-8 helpers.

/// Returns the number of bytes the UTF-8 encoding of `text` occupies.
///
/// Rust strings are already UTF-8, so this is a length read with no
/// allocation. Absent input counts as zero bytes.
pub fn byte_length(text: Option<&str>) -> usize {
    text.map_or(0, str::len)
}

/// Encodes `text` as its UTF-8 byte sequence.
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes a complete UTF-8 byte sequence into a string.
///
/// Malformed sequences are replaced with U+FFFD rather than rejected,
/// matching the standard lossy substitution policy. For input that
/// arrives in chunks, use [`Utf8Stream`][crate::Utf8Stream] so partial
/// sequences at chunk boundaries are not misread as malformed.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
