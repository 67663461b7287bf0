//! Chunked UTF-8 decoding.

/// Streaming UTF-8 decoder.
///
/// A multi-byte character split across two chunks would look malformed
/// to a one-shot decoder. `Utf8Stream` holds the incomplete trailing
/// sequence (at most 3 bytes) between calls and prepends it to the next
/// chunk, so the split point never changes the output.
///
/// The buffered state lives in this value, owned by the caller, rather
/// than in any hidden global. Call [`finish`][Utf8Stream::finish] when
/// the input ends; a leftover partial sequence decodes to U+FFFD, the
/// same substitution a one-shot [`decode`][crate::decode] applies.
#[derive(Debug, Default)]
pub struct Utf8Stream {
    pending: Vec<u8>,
}

impl Utf8Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the next chunk, returning all text that is complete so far.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let keep = incomplete_suffix_len(&self.pending);
        let split = self.pending.len() - keep;
        let tail = self.pending.split_off(split);
        let head = std::mem::replace(&mut self.pending, tail);

        String::from_utf8_lossy(&head).into_owned()
    }

    /// Flushes the decoder at end of input.
    ///
    /// A buffered partial sequence can no longer be completed, so it
    /// decodes to the replacement character.
    pub fn finish(self) -> String {
        String::from_utf8_lossy(&self.pending).into_owned()
    }
}

/// Length of an incomplete multi-byte sequence at the end of `bytes`,
/// or 0 if the input ends on a complete (or outright malformed) boundary.
///
/// Only a genuinely completable sequence is reported: an invalid lead
/// byte is left for the lossy decoder to substitute immediately.
fn incomplete_suffix_len(bytes: &[u8]) -> usize {
    let len = bytes.len();
    // a lead byte can sit at most 3 positions from the end and still be
    // waiting for continuations
    let start = len.saturating_sub(3);

    for i in (start..len).rev() {
        let byte = bytes[i];
        if byte < 0x80 {
            // ascii never dangles
            return 0;
        }
        if byte >= 0xF8 {
            // not a valid lead; no amount of further input completes it
            return 0;
        }
        if byte >= 0xC0 {
            let need = match byte {
                0xF0..=0xF7 => 4,
                0xE0..=0xEF => 3,
                _ => 2,
            };
            let have = len - i;
            return if have < need { have } else { 0 };
        }
        // continuation byte: keep scanning for its lead
    }
    0
}
