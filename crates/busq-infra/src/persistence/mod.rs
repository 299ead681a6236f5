//! Persistence implementations
//!
//! Repository traits from the domain layer backed by a key-value store.

mod kv_reservation_repo;

pub use kv_reservation_repo::{
    KeyValueReservationRepository, CONFIRMED_RESERVATION_KEY, PENDING_RESERVATION_KEY,
};
