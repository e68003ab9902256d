//! SQLite DAO implementations.

mod officer_dao_impl;

pub use officer_dao_impl::SqliteOfficerDaoImpl;
