//! Result type aliases for Starfleet.

use crate::StarfleetError;

/// A specialized `Result` type for Starfleet operations.
pub type StarfleetResult<T> = Result<T, StarfleetError>;
