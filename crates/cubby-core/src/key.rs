use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier of a record.
///
/// Keys are random v4 UUIDs generated client-side before the first
/// insert attempt. The nil UUID is reserved as the "not yet assigned"
/// sentinel and is rejected by every service operation that takes a
/// key as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Draws a fresh random key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The unassigned sentinel.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this key is the unassigned sentinel.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for RecordKey {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for RecordKey {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
