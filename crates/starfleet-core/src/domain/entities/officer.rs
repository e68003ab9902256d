//! Officer entity.

use super::super::value_objects::Rank;
use crate::OfficerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An officer row.
///
/// `id` is `None` until the officer has been saved, at which point storage
/// assigns the surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    /// Surrogate key, `None` while transient.
    pub id: Option<OfficerId>,

    /// Officer's rank.
    pub rank: Rank,

    /// Officer's first name.
    pub first_name: String,

    /// Officer's last name.
    pub last_name: String,
}

impl Officer {
    /// Creates a transient officer.
    #[must_use]
    pub fn new(rank: Rank, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            rank,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates an officer with an explicit key.
    #[must_use]
    pub fn with_id(
        id: OfficerId,
        rank: Rank,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(rank, first_name, last_name)
        }
    }

    /// Returns true if the officer has never been saved.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.id.is_none()
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Officer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rank, self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_officer_is_transient() {
        let officer = Officer::new(Rank::Captain, "James", "Kirk");
        assert!(officer.is_transient());
        assert_eq!(officer.full_name(), "James Kirk");
    }

    #[test]
    fn test_with_id() {
        let officer = Officer::with_id(OfficerId::new(2), Rank::Captain, "Jean-Luc", "Picard");
        assert_eq!(officer.id, Some(OfficerId::new(2)));
        assert!(!officer.is_transient());
    }

    #[test]
    fn test_display() {
        let officer = Officer::new(Rank::Captain, "Kathryn", "Janeway");
        assert_eq!(officer.to_string(), "CAPTAIN Kathryn Janeway");
    }
}
