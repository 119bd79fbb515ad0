//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory asset.
///
/// Integer on the wire. Values are clock-derived (milliseconds since the Unix
/// epoch) but callers must treat them as opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(i64);

impl AssetId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for AssetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for AssetId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AssetId> for i64 {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

/// Strict base-10 parse. `"5"` and `"+5"` parse; `"5.0"`, `" 5"` and `"abc"` do not.
impl FromStr for AssetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("AssetId: {e}")))
    }
}
