use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Identity of a finalized order line: SHA-256 over its canonical encoding,
/// kept as 64 lowercase hex chars.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub struct LineId(String);

impl LineId {
    pub fn hash(data: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(data)))
    }

    pub fn parse(hex_str: &str) -> Result<Self, CoreError> {
        let hex_str = hex_str.trim();
        if hex_str.len() != 64 || !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidLineId(hex_str.to_string()));
        }
        Ok(Self(hex_str.to_lowercase()))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// First 8 chars, for display.
    pub fn short(&self) -> &str {
        &self.0[..8]
    }
}

impl TryFrom<String> for LineId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.short())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
