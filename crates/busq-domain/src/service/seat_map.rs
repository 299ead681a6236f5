//! Seat plan generation and seat selection checks

use busq_types::{BookingError, BusType};

use crate::model::{Seat, SeatLayout, SeatStatus};

const MAIN_ROWS: u32 = 12;
const REAR_BENCH_SEATS: u32 = 5;
/// Index of the column followed by the aisle ("B")
const AISLE_AFTER_COLUMN: usize = 1;

fn columns(bus_type: BusType) -> &'static [char] {
    match bus_type {
        BusType::Traditional => &['A', 'B', 'C', 'D'],
        BusType::Airconditioned => &['A', 'B', 'C', 'D', 'E'],
    }
}

fn main_seat_reserved(bus_type: BusType, counter: u32) -> bool {
    match bus_type {
        BusType::Traditional => counter % 7 == 0 || counter % 11 == 0,
        BusType::Airconditioned => counter % 6 == 0 || counter % 13 == 0,
    }
}

fn rear_seat_reserved(bus_type: BusType, counter: u32) -> bool {
    match bus_type {
        BusType::Traditional => counter % 8 == 0,
        BusType::Airconditioned => counter % 9 == 0,
    }
}

fn seat(id: String, reserved: bool) -> Seat {
    Seat {
        id,
        status: if reserved {
            SeatStatus::Reserved
        } else {
            SeatStatus::Available
        },
    }
}

/// Build the seat plan of a bus type.
///
/// Reserved seats follow a fixed pattern over a running seat counter, so the
/// same bus type always shows the same plan.
pub fn generate_seat_layout(bus_type: BusType) -> SeatLayout {
    let cols = columns(bus_type);
    let mut counter = 0u32;
    let mut rows = Vec::with_capacity(MAIN_ROWS as usize);

    for row_num in 1..=MAIN_ROWS {
        let mut row = Vec::with_capacity(cols.len() + 1);
        for (index, col) in cols.iter().enumerate() {
            counter += 1;
            row.push(Some(seat(
                format!("{}{}", col, row_num),
                main_seat_reserved(bus_type, counter),
            )));
            if index == AISLE_AFTER_COLUMN {
                row.push(None);
            }
        }
        rows.push(row);
    }

    let rear_bench = (1..=REAR_BENCH_SEATS)
        .map(|i| {
            counter += 1;
            seat(format!("R{}", i), rear_seat_reserved(bus_type, counter))
        })
        .collect();

    SeatLayout {
        bus_type,
        rows,
        rear_bench,
    }
}

/// Check a seat selection against the layout.
///
/// Returns the canonical seat ids in selection order.
pub fn validate_selection(
    layout: &SeatLayout,
    selection: &[String],
) -> Result<Vec<String>, BookingError> {
    if selection.is_empty() {
        return Err(BookingError::NoSeatsSelected);
    }

    let mut chosen: Vec<String> = Vec::with_capacity(selection.len());
    for requested in selection {
        let seat = layout
            .find(requested)
            .ok_or_else(|| BookingError::UnknownSeat(requested.trim().to_string()))?;
        if !seat.is_available() {
            return Err(BookingError::SeatUnavailable(seat.id.clone()));
        }
        if chosen.contains(&seat.id) {
            return Err(BookingError::DuplicateSeat(seat.id.clone()));
        }
        chosen.push(seat.id.clone());
    }
    Ok(chosen)
}
