//! Infrastructure layer: reservation persistence and TOML data loaders

pub mod fare_table_loader;
pub mod fleet_loader;
pub mod persistence;

pub use fare_table_loader::FareTableLoader;
pub use fleet_loader::FleetLoader;
