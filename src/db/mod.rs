//! Data access layer. Route handlers call these functions to touch SQLite.

pub mod schools;

pub use schools::*;
