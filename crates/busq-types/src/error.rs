//! Error types for busq

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    IoError(String),
}

/// Booking workflow errors
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Bus not found: {0}")]
    BusNotFound(String),

    #[error("Trip {trip_id} is not bookable (status: {status})")]
    TripNotBookable { trip_id: String, status: String },

    #[error("Passenger name is required")]
    MissingPassengerName,

    #[error("No seats selected")]
    NoSeatsSelected,

    #[error("Unknown seat: {0}")]
    UnknownSeat(String),

    #[error("Seat already reserved: {0}")]
    SeatUnavailable(String),

    #[error("Seat selected more than once: {0}")]
    DuplicateSeat(String),

    #[error("Requested {requested} seats but only {available} available")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("Stop '{stop}' is not on the {route} route")]
    UnknownStop { stop: String, route: String },

    #[error("No pending reservation found")]
    NoPendingReservation,

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),
}

pub type Result<T> = std::result::Result<T, Error>;
