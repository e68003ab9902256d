//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module (e.g. `officer_dao.rs`).
//! Implementations are organized by technology.

pub mod sqlite;

pub use sqlite::SqliteOfficerDaoImpl;
