//! Application use cases

pub mod board_service;
pub mod booking_service;

pub use board_service::{track_bus, tracking_message, BoardEntry, BoardFilter, TripBoard};
pub use booking_service::{BookingRequest, BookingService};
