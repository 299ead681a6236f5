//! Built-in fleet and fare data for the Mantalongon - Cebu City corridor

pub mod fares;
pub mod fleet;

pub use fares::FARE_TABLE;
pub use fleet::{get_bus, FLEET};
