//! Typed ID wrappers.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// Surrogate key of an officer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficerId(pub i32);

impl OfficerId {
    /// Creates an officer ID from a raw key.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw key.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for OfficerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for OfficerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<OfficerId> for i32 {
    fn from(id: OfficerId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for unit-of-work IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitOfWorkId(pub Uuid);

impl UnitOfWorkId {
    /// Creates a new time-ordered unit-of-work ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UnitOfWorkId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UnitOfWorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
