//! # Starfleet Repository
//!
//! Officer data access over SQLx/SQLite:
//!
//! ```text
//! Caller
//!   ↓  owns UnitOfWork           (begin / commit / rollback)
//! OfficerDao                     (DAO interface)
//!   ↓  &mut UnitOfWork
//! SqliteOfficerDaoImpl           (DAO impl, SQLite / SQLx)
//!   ↓
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                      ← DatabasePool, DatabasePoolInterface
//!   unit_of_work.rs              ← UnitOfWork
//!   di.rs                        ← PersistenceModule
//!   dao/
//!     officer_dao.rs             ← OfficerDao trait
//!     impl/
//!       sqlite/
//!         officer_dao_impl.rs    ← SqliteOfficerDaoImpl
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use starfleet_config::DatabaseConfig;
//! use starfleet_core::{Officer, Rank, StarfleetResult};
//! use starfleet_repository::{DatabasePool, OfficerDao, SqliteOfficerDaoImpl};
//!
//! async fn enlist(config: &DatabaseConfig) -> StarfleetResult<Officer> {
//!     let pool = DatabasePool::connect(config).await?;
//!     let mut uow = pool.begin().await?;
//!     let saved = SqliteOfficerDaoImpl::new(&mut uow)
//!         .save(Officer::new(Rank::Captain, "Benjamin", "Sisko"))
//!         .await?;
//!     uow.commit().await?;
//!     Ok(saved)
//! }
//! ```

pub mod dao;
pub mod di;
pub mod pool;
pub mod unit_of_work;

pub use dao::{OfficerDao, SqliteOfficerDaoImpl};
pub use di::*;
pub use pool::*;
pub use unit_of_work::UnitOfWork;
