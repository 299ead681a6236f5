use busq_types::{BusType, Direction};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One scheduled one-directional movement of a physical bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripLeg {
    /// `{bus_id}-{MtoC|CtoM}-{yyyyMMddHHmm}`
    pub id: String,
    pub bus_id: String,
    pub direction: Direction,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub bus_type: BusType,
    /// Full-route fare per seat
    pub price: f64,
    pub total_seats: u32,
    pub available_seats: u32,
    pub travel_duration_mins: i64,
    pub layover_mins: i64,
    pub plate: String,
}

impl TripLeg {
    pub fn departure_time(&self) -> String {
        self.departure.format("%H:%M").to_string()
    }

    pub fn arrival_time(&self) -> String {
        self.arrival.format("%H:%M").to_string()
    }

    pub fn trip_date(&self) -> NaiveDate {
        self.departure.date()
    }

    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }
}
