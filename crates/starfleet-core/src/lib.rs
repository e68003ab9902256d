//! # Starfleet Core
//!
//! Core types, traits, and error definitions for Starfleet officer persistence.
//! Every other crate in the workspace builds on the abstractions defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
