use crate::alphabet::BYTE_TO_CHAR;
use crate::entropy::{OsEntropy, RandomSource};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// Default output length, 64^11 possible values.
pub const DEFAULT_LENGTH: usize = 11;

/// A short random identifier over the 64-symbol alphabet.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortId(SmolStr);

impl ShortId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (equal to the number of bytes; the alphabet
    /// is pure ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortId").field(&self.0).finish()
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// Configures a short-id generator instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortIdSettings {
    /// Output length in characters. Must be at least 1.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
}

/// Short-id generator over an injected random source.
///
/// The generator is stateless apart from the source itself: every call
/// draws fresh bytes, so there is no uniqueness registry. Collision odds
/// are the birthday bound over `64^length` values.
pub struct ShortIdGenerator<R: RandomSource> {
    length: usize,
    source: R,
}

impl ShortIdGenerator<OsEntropy> {
    /// Creates a generator backed by the platform CSPRNG.
    pub fn new(settings: ShortIdSettings) -> Result<Self, Error> {
        Self::with_source(settings, OsEntropy)
    }
}

impl<R: RandomSource> ShortIdGenerator<R> {
    pub fn with_source(settings: ShortIdSettings, source: R) -> Result<Self, Error> {
        if settings.length == 0 {
            return Err(Error::InvalidLength {
                length: settings.length,
            });
        }

        Ok(Self {
            length: settings.length,
            source,
        })
    }

    /// Generates the next identifier: one random byte per output
    /// character, each mapped through the alphabet table in draw order.
    pub fn generate(&self) -> Result<ShortId, Error> {
        let mut bytes = vec![0u8; self.length];
        self.source.fill(&mut bytes)?;

        let mut out = String::with_capacity(self.length);
        for byte in bytes {
            // every table entry is ASCII, so pushing as char never expands
            out.push(BYTE_TO_CHAR[byte as usize] as char);
        }

        Ok(ShortId(SmolStr::new(out)))
    }
}

/// Generates an identifier of the default length (11) from the platform
/// CSPRNG.
pub fn short_id() -> Result<ShortId, Error> {
    short_id_with_length(DEFAULT_LENGTH)
}

/// Generates an identifier of the given length from the platform CSPRNG.
pub fn short_id_with_length(length: usize) -> Result<ShortId, Error> {
    let settings = ShortIdSettings::builder().length(length).build();
    ShortIdGenerator::new(settings)?.generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;
    use crate::entropy::test_entropy::{BrokenEntropy, PatternEntropy};
    use std::collections::HashSet;

    fn make_generator(length: usize) -> ShortIdGenerator<OsEntropy> {
        let settings = ShortIdSettings::builder().length(length).build();
        ShortIdGenerator::new(settings).unwrap()
    }

    #[test]
    fn default_length_is_11() {
        let id = short_id().unwrap();
        assert_eq!(id.len(), 11);
    }

    #[test]
    fn honors_requested_length() {
        for length in [1, 4, 5, 6, 32, 100] {
            let gen = make_generator(length);
            for _ in 0..1_000 {
                let id = gen.generate().unwrap();
                assert_eq!(id.len(), length, "{:?} is not {} characters", id, length);
            }
        }
    }

    #[test]
    fn output_stays_inside_the_alphabet() {
        let gen = make_generator(256);
        let id = gen.generate().unwrap();
        assert!(id.as_str().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn zero_length_is_rejected() {
        let settings = ShortIdSettings::builder().length(0).build();
        let result = ShortIdGenerator::new(settings);
        assert!(matches!(result, Err(Error::InvalidLength { length: 0 })));
    }

    #[test]
    fn large_sample_is_pairwise_distinct() {
        // With 64^11 possible values, 100k draws collide with probability
        // around 1e-10; any repeat means the generator is broken.
        let gen = make_generator(DEFAULT_LENGTH);
        let mut seen = HashSet::with_capacity(100_000);
        for _ in 0..100_000 {
            assert!(seen.insert(gen.generate().unwrap()));
        }
    }

    #[test]
    fn mapping_follows_the_source_bytes_in_order() {
        // bytes 0, 1, 2, ... map to ALPHABET[0], ALPHABET[1], ...
        let settings = ShortIdSettings::builder().length(8).build();
        let gen = ShortIdGenerator::with_source(settings, PatternEntropy::counting()).unwrap();

        let id = gen.generate().unwrap();
        assert_eq!(id.as_str(), "ABCDEFGH");
    }

    #[test]
    fn high_bytes_wrap_onto_the_alphabet() {
        // 0xFF & 63 == 63, the last alphabet symbol
        let settings = ShortIdSettings::builder().length(3).build();
        let gen =
            ShortIdGenerator::with_source(settings, PatternEntropy::new(vec![0xFF])).unwrap();

        let id = gen.generate().unwrap();
        assert_eq!(id.as_str(), "---");
    }

    #[test]
    fn broken_source_surfaces_the_error() {
        let settings = ShortIdSettings::builder().build();
        let gen = ShortIdGenerator::with_source(settings, BrokenEntropy).unwrap();
        assert!(matches!(
            gen.generate(),
            Err(Error::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let settings = ShortIdSettings::builder().build();
        let gen = ShortIdGenerator::with_source(settings, PatternEntropy::counting()).unwrap();

        let id = gen.generate().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));

        let back: ShortId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
