//! Implementations of ports (hexagonal adapters).

pub mod store;
