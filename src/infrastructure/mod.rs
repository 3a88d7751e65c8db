//! Infrastructure layer: database and name-resolution adapters.

pub mod dns;
pub mod persistence;
