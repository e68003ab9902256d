//! Dependency injection module using Shaku.
//!
//! The pool is the only long-lived component; units of work and DAOs are
//! created per operation by the caller.

use crate::DatabasePool;
use starfleet_config::DatabaseConfig;
use starfleet_core::{module, StarfleetResult};
use std::sync::Arc;

// Persistence module: the SQLite pool behind `DatabasePoolInterface`.
module! {
    pub PersistenceModule {
        components = [
            DatabasePool,
        ],
        providers = [],
    }
}

/// Builds the persistence module from configuration.
pub async fn build_persistence_module(config: &DatabaseConfig) -> StarfleetResult<Arc<PersistenceModule>> {
    let db_pool = DatabasePool::connect(config).await?;

    let module = PersistenceModule::builder()
        .with_component_parameters::<DatabasePool>(crate::DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build();

    Ok(Arc::new(module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabasePoolInterface;
    use starfleet_core::HasComponent;

    #[tokio::test]
    async fn test_module_resolves_pool() {
        let module = build_persistence_module(&DatabaseConfig::in_memory()).await.unwrap();
        let pool: Arc<dyn DatabasePoolInterface> = module.resolve();

        pool.health_check().await.unwrap();
        let uow = pool.begin().await.unwrap();
        uow.rollback().await.unwrap();
    }

    #[tokio::test]
    async fn test_resolved_pool_is_shared() {
        let module = build_persistence_module(&DatabaseConfig::in_memory()).await.unwrap();
        let first: Arc<dyn DatabasePoolInterface> = module.resolve();
        let second: Arc<dyn DatabasePoolInterface> = module.resolve();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
