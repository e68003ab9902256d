//! OfficerDao trait: officer data access abstraction.
//!
//! Implementations execute against the unit of work they were constructed
//! with. Transaction boundaries belong to the caller.

use async_trait::async_trait;
use starfleet_core::{Officer, OfficerId, StarfleetResult};

/// Officer data access object.
///
/// Methods take `&mut self` because each call runs on the borrowed unit of
/// work's single connection.
#[async_trait]
pub trait OfficerDao: Send {
    /// Inserts the officer and returns it with its id populated.
    ///
    /// The officer becomes attached to the unit of work. No validation is
    /// performed; a duplicate explicit id is a [`Conflict`] error.
    ///
    /// [`Conflict`]: starfleet_core::StarfleetError::Conflict
    async fn save(&mut self, officer: Officer) -> StarfleetResult<Officer>;

    /// Finds an officer by id. Absence is `Ok(None)`, never an error.
    async fn find_by_id(&mut self, id: OfficerId) -> StarfleetResult<Option<Officer>>;

    /// Returns every officer, in no particular order.
    async fn find_all(&mut self) -> StarfleetResult<Vec<Officer>>;

    /// Counts all officers.
    async fn count(&mut self) -> StarfleetResult<u64>;

    /// Deletes an officer attached to this unit of work.
    ///
    /// Fails with [`Detached`] if the officer is transient or was not saved
    /// or loaded through this unit of work.
    ///
    /// [`Detached`]: starfleet_core::StarfleetError::Detached
    async fn delete(&mut self, officer: &Officer) -> StarfleetResult<()>;

    /// Checks whether a row with this id exists.
    async fn exists_by_id(&mut self, id: OfficerId) -> StarfleetResult<bool>;
}
