//! Data model structs, re-exported flat so callers write `models::School`.

pub mod school;

pub use school::*;
