//! Reservation repository over a string key-value store

use busq_domain::model::Reservation;
use busq_domain::repository::ReservationRepository;
use busq_store::KeyValueStore;
use busq_types::Error;

/// Key of the reservation awaiting payment
pub const PENDING_RESERVATION_KEY: &str = "pendingReservation";
/// Key of the last confirmed reservation
pub const CONFIRMED_RESERVATION_KEY: &str = "mockReservationDetails";

/// Stores reservations as JSON blobs under fixed keys
pub struct KeyValueReservationRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KeyValueReservationRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode a reservation; malformed data is logged and treated as absent
    fn load(&self, key: &str) -> Result<Option<Reservation>, Error> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(e) => {
                tracing::error!(key, error = %e, "stored reservation is malformed");
                Ok(None)
            }
        }
    }

    fn write(&self, key: &str, reservation: &Reservation) -> Result<(), Error> {
        let json = serde_json::to_string(reservation)?;
        self.store.set(key, &json)?;
        tracing::debug!(key, id = %reservation.id, "reservation saved");
        Ok(())
    }
}

impl<S: KeyValueStore> ReservationRepository for KeyValueReservationRepository<S> {
    fn save_pending(&self, reservation: &Reservation) -> Result<(), Error> {
        self.write(PENDING_RESERVATION_KEY, reservation)
    }

    fn find_pending(&self) -> Result<Option<Reservation>, Error> {
        self.load(PENDING_RESERVATION_KEY)
    }

    fn clear_pending(&self) -> Result<(), Error> {
        self.store.remove(PENDING_RESERVATION_KEY)?;
        Ok(())
    }

    fn save_confirmed(&self, reservation: &Reservation) -> Result<(), Error> {
        self.write(CONFIRMED_RESERVATION_KEY, reservation)
    }

    fn find_confirmed(&self, id: &str) -> Result<Option<Reservation>, Error> {
        Ok(self
            .load(CONFIRMED_RESERVATION_KEY)?
            .filter(|reservation| reservation.id.eq_ignore_ascii_case(id.trim())))
    }
}
