//! Unit of work: one transaction plus the set of officers it has attached.
//!
//! A [`UnitOfWork`] is opened by the caller, lent to DAOs as `&mut`, and
//! closed by the caller with [`commit`](UnitOfWork::commit) or
//! [`rollback`](UnitOfWork::rollback). Dropping it without committing rolls
//! the transaction back.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use starfleet_core::{OfficerId, StarfleetResult, UnitOfWorkId};
use std::collections::HashSet;
use tracing::debug;

/// A transaction-scoped persistence context.
///
/// Holds no entity state, only the ids of officers that were saved or loaded
/// through it. Deleting requires the officer to be attached here.
pub struct UnitOfWork {
    id: UnitOfWorkId,
    tx: Transaction<'static, Sqlite>,
    attached: HashSet<OfficerId>,
}

impl UnitOfWork {
    /// Acquires a connection from the pool and begins a transaction.
    pub async fn begin(pool: &SqlitePool) -> StarfleetResult<Self> {
        let tx = pool.begin().await?;
        let id = UnitOfWorkId::new();
        debug!(uow = %id, "Unit of work started");

        Ok(Self {
            id,
            tx,
            attached: HashSet::new(),
        })
    }

    /// Returns this unit of work's id.
    #[must_use]
    pub const fn id(&self) -> UnitOfWorkId {
        self.id
    }

    /// Returns the transaction's connection for executing statements.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Marks an officer as attached.
    pub fn attach(&mut self, id: OfficerId) {
        self.attached.insert(id);
    }

    /// Removes an officer from the attached set. Returns `true` if it was attached.
    pub fn detach(&mut self, id: OfficerId) -> bool {
        self.attached.remove(&id)
    }

    /// Returns true if the officer was saved or loaded through this unit of work.
    #[must_use]
    pub fn is_attached(&self, id: OfficerId) -> bool {
        self.attached.contains(&id)
    }

    /// Detaches every officer. The transaction stays open.
    pub fn clear(&mut self) {
        self.attached.clear();
    }

    /// Number of attached officers.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Commits the transaction.
    pub async fn commit(self) -> StarfleetResult<()> {
        debug!(uow = %self.id, attached = self.attached.len(), "Committing unit of work");
        self.tx.commit().await?;
        Ok(())
    }

    /// Rolls the transaction back.
    pub async fn rollback(self) -> StarfleetResult<()> {
        debug!(uow = %self.id, "Rolling back unit of work");
        self.tx.rollback().await?;
        Ok(())
    }
}

impl std::fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnitOfWork")
            .field("id", &self.id)
            .field("attached", &self.attached.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabasePool;
    use starfleet_config::DatabaseConfig;

    async fn memory_pool() -> DatabasePool {
        DatabasePool::new(&DatabaseConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_attach_and_detach() {
        let pool = memory_pool().await;
        let mut uow = UnitOfWork::begin(pool.inner()).await.unwrap();
        let id = OfficerId::new(1);

        assert!(!uow.is_attached(id));
        uow.attach(id);
        assert!(uow.is_attached(id));
        assert_eq!(uow.attached_count(), 1);

        assert!(uow.detach(id));
        assert!(!uow.detach(id));
        assert!(!uow.is_attached(id));
    }

    #[tokio::test]
    async fn test_clear_detaches_everything() {
        let pool = memory_pool().await;
        let mut uow = UnitOfWork::begin(pool.inner()).await.unwrap();
        uow.attach(OfficerId::new(1));
        uow.attach(OfficerId::new(2));

        uow.clear();
        assert_eq!(uow.attached_count(), 0);
    }

    #[tokio::test]
    async fn test_each_unit_of_work_has_its_own_id() {
        let pool = memory_pool().await;
        let first = UnitOfWork::begin(pool.inner()).await.unwrap();
        let first_id = first.id();
        first.rollback().await.unwrap();

        let second = UnitOfWork::begin(pool.inner()).await.unwrap();
        assert_ne!(first_id, second.id());
        second.commit().await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_executes_statements() {
        let pool = memory_pool().await;
        let mut uow = UnitOfWork::begin(pool.inner()).await.unwrap();

        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(uow.connection())
            .await
            .unwrap();
        assert_eq!(one, 1);
    }
}
