use thiserror::Error;

/// Errors returned by identifier generation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Error {
    #[error("system entropy source unavailable: {0}")]
    EntropyUnavailable(getrandom::Error),
    #[error("invalid id length {length}; expected at least 1")]
    InvalidLength { length: usize },
}
