//! Repository trait definitions for reservation persistence

use crate::model::Reservation;
use busq_types::Error;

/// Storage of the booking hand-off between seat selection and payment.
///
/// Holds at most one pending reservation and one confirmed reservation;
/// saving replaces the previous value.
pub trait ReservationRepository {
    /// Save the reservation awaiting payment
    fn save_pending(&self, reservation: &Reservation) -> Result<(), Error>;

    /// Load the reservation awaiting payment, `None` if absent or unreadable
    fn find_pending(&self) -> Result<Option<Reservation>, Error>;

    /// Drop the pending reservation
    fn clear_pending(&self) -> Result<(), Error>;

    /// Save a paid reservation
    fn save_confirmed(&self, reservation: &Reservation) -> Result<(), Error>;

    /// Find the confirmed reservation with this id
    fn find_confirmed(&self, id: &str) -> Result<Option<Reservation>, Error>;
}
