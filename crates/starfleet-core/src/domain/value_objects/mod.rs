//! Value objects.

mod rank;

pub use rank::Rank;
