//! DAO (Data Access Object) layer.
//!
//! A DAO borrows a [`UnitOfWork`](crate::UnitOfWork) for its whole lifetime
//! and delegates every operation to it.
//!
//! ```text
//! Caller → UnitOfWork (begin/commit) → OfficerDao (trait) → SqliteOfficerDaoImpl → SQLite
//! ```

pub mod officer_dao;
pub mod r#impl;

pub use officer_dao::OfficerDao;
pub use r#impl::SqliteOfficerDaoImpl;
