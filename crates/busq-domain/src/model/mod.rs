//! Domain model types

pub mod daily_schedule;
pub mod fare;
pub mod physical_bus;
pub mod reservation;
pub mod seat;
pub mod trip_leg;

pub use daily_schedule::{BusLegs, DailySchedule};
pub use fare::{FareQuote, FareRoute, FareSource, FareStop, FareTable};
pub use physical_bus::PhysicalBusSchedule;
pub use reservation::{PaymentSummary, Reservation};
pub use seat::{Seat, SeatLayout, SeatStatus};
pub use trip_leg::TripLeg;

/// Serde helper for `HH:MM` time-of-day strings
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
