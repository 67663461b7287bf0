use crate::error::Error;

pub trait RandomSource: Send + Sync {
    /// Fills the buffer with cryptographically secure random bytes.
    ///
    /// Implementations must either fill the entire buffer or fail; a
    /// partially filled buffer is never returned.
    fn fill(&self, buf: &mut [u8]) -> Result<(), Error>;
}

/// The platform CSPRNG, via `getrandom`.
///
/// There is no fallback: if the operating system cannot supply secure
/// random bytes the call fails with [`Error::EntropyUnavailable`].
/// Retrying a broken entropy source is not meaningful, so callers get
/// the error directly.
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), Error> {
        getrandom::getrandom(buf).map_err(Error::EntropyUnavailable)
    }
}
