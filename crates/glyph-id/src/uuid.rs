use crate::entropy::{OsEntropy, RandomSource};
use crate::error::Error;
use crate::hex::HEX;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// Canonical textual length: 32 hex digits plus 4 hyphens.
const UUID_LEN: usize = 36;

/// A version-4 UUID in canonical hyphenated form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UuidV4(SmolStr);

impl UuidV4 {
    /// Returns the UUID as a string slice. Always 36 lowercase characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for UuidV4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("UuidV4").field(&self.0).finish()
    }
}

impl Display for UuidV4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for UuidV4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UuidV4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

/// UUID v4 generator over an injected random source.
pub struct UuidGenerator<R: RandomSource> {
    source: R,
}

impl UuidGenerator<OsEntropy> {
    /// Creates a generator backed by the platform CSPRNG.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for UuidGenerator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> UuidGenerator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Generates the next UUID.
    ///
    /// Draws 16 random bytes, then forces the RFC 4122 marker bits so the
    /// output validates as v4 no matter what the source produced:
    /// - byte 6 high nibble becomes `0100` (version 4)
    /// - byte 8 top two bits become `10` (variant)
    pub fn generate(&self) -> Result<UuidV4, Error> {
        let mut bytes = [0u8; 16];
        self.source.fill(&mut bytes)?;

        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;

        let mut out = String::with_capacity(UUID_LEN);
        for (i, byte) in bytes.iter().enumerate() {
            out.push_str(HEX[*byte as usize]);
            if matches!(i, 3 | 5 | 7 | 9) {
                out.push('-');
            }
        }

        Ok(UuidV4(SmolStr::new(out)))
    }
}

/// Generates a version-4 UUID from the platform CSPRNG.
pub fn uuid_v4() -> Result<UuidV4, Error> {
    UuidGenerator::new().generate()
}
