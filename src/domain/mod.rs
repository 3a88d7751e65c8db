//! Domain layer: entities and the ports the core logic depends on.

pub mod entities;
pub mod repositories;
pub mod resolver;
