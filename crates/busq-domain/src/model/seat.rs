use busq_types::BusType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Column letter + row number (e.g., "B7"), or "R1".."R5" on the rear bench
    pub id: String,
    pub status: SeatStatus,
}

impl Seat {
    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }
}

/// Seat plan of one bus. `None` cells in a row mark the aisle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatLayout {
    pub bus_type: BusType,
    pub rows: Vec<Vec<Option<Seat>>>,
    pub rear_bench: Vec<Seat>,
}

impl SeatLayout {
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().flatten())
            .chain(self.rear_bench.iter())
    }

    pub fn find(&self, seat_id: &str) -> Option<&Seat> {
        self.seats().find(|seat| seat.id.eq_ignore_ascii_case(seat_id.trim()))
    }

    pub fn total(&self) -> usize {
        self.seats().count()
    }

    pub fn available_count(&self) -> usize {
        self.seats().filter(|seat| seat.is_available()).count()
    }
}
