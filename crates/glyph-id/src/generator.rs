use crate::entropy::RandomSource;
use crate::error::Error;
use crate::short_id::{ShortId, ShortIdGenerator};
use crate::uuid::{UuidGenerator, UuidV4};

/// Trait for minting identifiers.
///
/// Implementations are pure generators: no storage, no uniqueness
/// registry. Callers that only need "give me a fresh id" can stay
/// generic over the id flavor.
pub trait Generator: Send + Sync {
    type Output;

    /// Produces the next identifier, drawing fresh entropy per call.
    fn generate(&self) -> Result<Self::Output, Error>;
}

impl<R: RandomSource> Generator for ShortIdGenerator<R> {
    type Output = ShortId;

    fn generate(&self) -> Result<Self::Output, Error> {
        ShortIdGenerator::generate(self)
    }
}

impl<R: RandomSource> Generator for UuidGenerator<R> {
    type Output = UuidV4;

    fn generate(&self) -> Result<Self::Output, Error> {
        UuidGenerator::generate(self)
    }
}
