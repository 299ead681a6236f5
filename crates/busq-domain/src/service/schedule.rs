//! Schedule generation: physical buses + service date -> trip legs

use busq_types::{BusType, Direction};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{DailySchedule, PhysicalBusSchedule, TripLeg};

/// Minimum seats shown as available on any generated leg
const MIN_AVAILABLE_SEATS: u32 = 5;

/// Timing constants of a schedule scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Travel time of one leg
    pub travel_duration_mins: i64,
    /// Time parked at the far terminal before the return leg
    pub layover_mins: i64,
    /// Generate return legs (Cebu City -> Mantalongon)
    pub round_trip: bool,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            travel_duration_mins: 240,
            layover_mins: 60,
            round_trip: true,
        }
    }
}

/// Generate every trip leg for `service_date`, sorted by departure.
///
/// Seat availability and price depend only on the bus record, so calling this
/// twice with the same inputs yields identical legs.
pub fn generate_schedule(
    buses: &[PhysicalBusSchedule],
    service_date: NaiveDate,
    settings: &ScheduleSettings,
) -> DailySchedule {
    let travel = Duration::minutes(settings.travel_duration_mins);
    let layover = Duration::minutes(settings.layover_mins);
    let mut legs = Vec::with_capacity(buses.len() * 2);

    for bus in buses {
        let outbound_departure = service_date.and_time(bus.departure);
        let outbound_arrival = outbound_departure + travel;
        let outbound = build_leg(
            bus,
            Direction::MantalongonToCebu,
            outbound_departure,
            outbound_arrival,
            settings,
        );
        legs.push(outbound);

        if settings.round_trip {
            let return_departure = outbound_arrival + layover;
            let return_arrival = return_departure + travel;
            legs.push(build_leg(
                bus,
                Direction::CebuToMantalongon,
                return_departure,
                return_arrival,
                settings,
            ));
        }
    }

    tracing::debug!(
        date = %service_date,
        buses = buses.len(),
        legs = legs.len(),
        "generated daily schedule"
    );

    DailySchedule::new(service_date, legs)
}

fn build_leg(
    bus: &PhysicalBusSchedule,
    direction: Direction,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    settings: &ScheduleSettings,
) -> TripLeg {
    let total_seats = bus.bus_type.total_seats();
    TripLeg {
        id: format!(
            "{}-{}-{}",
            bus.bus_id,
            direction.code(),
            departure.format("%Y%m%d%H%M")
        ),
        bus_id: bus.bus_id.clone(),
        direction,
        origin: direction.origin().to_string(),
        destination: direction.destination().to_string(),
        departure,
        arrival,
        bus_type: bus.bus_type,
        price: bus.bus_type.base_price(),
        total_seats,
        available_seats: available_seats(bus),
        travel_duration_mins: settings.travel_duration_mins,
        layover_mins: settings.layover_mins,
        plate: bus.plate.clone(),
    }
}

/// Stable pseudo-availability derived from the bus id
fn available_seats(bus: &PhysicalBusSchedule) -> u32 {
    let n = bus.numeric_id();
    let total = bus.bus_type.total_seats();
    let base = match bus.bus_type {
        BusType::Airconditioned => 40 + n % 25,
        BusType::Traditional => 25 + n % 28,
    };
    base.clamp(MIN_AVAILABLE_SEATS, total)
}
