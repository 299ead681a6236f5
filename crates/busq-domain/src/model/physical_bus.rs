//! Physical bus definitions

use busq_types::BusType;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A specific vehicle and its fixed daily departure from Mantalongon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalBusSchedule {
    /// Stable identifier (e.g., "TRAD-001", "AC-001")
    pub bus_id: String,
    pub bus_type: BusType,
    /// Time of day of the first departure
    #[serde(with = "crate::model::hhmm")]
    pub departure: NaiveTime,
    /// Plate shown on the trip board and tracking view
    pub plate: String,
}

impl PhysicalBusSchedule {
    pub fn new(bus_id: &str, bus_type: BusType, departure: NaiveTime, plate: &str) -> Self {
        Self {
            bus_id: bus_id.to_string(),
            bus_type,
            departure,
            plate: plate.to_string(),
        }
    }

    /// Digits of the bus id as a number, 1 when there are none
    pub fn numeric_id(&self) -> u32 {
        let digits: String = self.bus_id.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse::<u32>().ok().filter(|n| *n > 0).unwrap_or(1)
    }
}
