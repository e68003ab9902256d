//! Officer rank value object.

use crate::StarfleetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naval officer ranks, lowest first.
///
/// Stored by name (`"REAR_ADMIRAL"`), never by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    #[default]
    Ensign,
    Lieutenant,
    Commander,
    Captain,
    Commodore,
    RearAdmiral,
    ViceAdmiral,
    Admiral,
}

impl Rank {
    /// Returns every rank in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Ensign,
            Self::Lieutenant,
            Self::Commander,
            Self::Captain,
            Self::Commodore,
            Self::RearAdmiral,
            Self::ViceAdmiral,
            Self::Admiral,
        ]
    }

    /// Returns the stored name of this rank.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ensign => "ENSIGN",
            Self::Lieutenant => "LIEUTENANT",
            Self::Commander => "COMMANDER",
            Self::Captain => "CAPTAIN",
            Self::Commodore => "COMMODORE",
            Self::RearAdmiral => "REAR_ADMIRAL",
            Self::ViceAdmiral => "VICE_ADMIRAL",
            Self::Admiral => "ADMIRAL",
        }
    }

    /// Exact lookup by stored name, no normalization.
    #[must_use]
    pub fn from_stored_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|rank| rank.as_str() == name)
    }

    /// Flag ranks are commodore and above.
    #[must_use]
    pub fn is_flag_officer(&self) -> bool {
        *self >= Self::Commodore
    }
}

impl FromStr for Rank {
    type Err = StarfleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace([' ', '-'], "_");
        Self::all()
            .into_iter()
            .find(|rank| rank.as_str() == normalized)
            .ok_or_else(|| StarfleetError::validation(format!("Unknown rank: {s}")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
