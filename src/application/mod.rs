//! Application layer: validation and registry logic over the domain ports.

pub mod services;
