//! Trip board and bus tracking use cases

use chrono::NaiveDateTime;
use serde::Serialize;

use busq_domain::model::DailySchedule;
use busq_domain::service::{classify, BusStatus};
use busq_types::{BookingError, BusType, Direction, Result, TripStatus};

/// Trip board filters; `None` matches everything
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardFilter {
    pub bus_type: Option<BusType>,
    /// Matched against the direction of the bus's representative leg
    pub direction: Option<Direction>,
}

impl BoardFilter {
    fn matches(&self, status: &BusStatus) -> bool {
        self.bus_type.map_or(true, |t| status.leg.bus_type == t)
            && self.direction.map_or(true, |d| status.leg.direction == d)
    }
}

/// One physical bus on the trip board
#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub bus_id: String,
    pub plate: String,
    pub bus_type: BusType,
    #[serde(flatten)]
    pub status: BusStatus,
}

impl BoardEntry {
    pub fn is_bookable(&self) -> bool {
        self.status.is_bookable()
    }
}

/// Status of every physical bus at one instant
#[derive(Debug, Clone, Serialize)]
pub struct TripBoard {
    pub generated_at: NaiveDateTime,
    pub entries: Vec<BoardEntry>,
}

impl TripBoard {
    /// Classify each bus of the schedule at `now` and apply the filter.
    ///
    /// Entries are sorted by lifecycle order, then by the departure of the
    /// representative leg.
    pub fn build(schedule: &DailySchedule, now: NaiveDateTime, filter: &BoardFilter) -> Self {
        let mut entries: Vec<BoardEntry> = schedule
            .bus_ids()
            .into_iter()
            .filter_map(|bus_id| schedule.legs_for_bus(bus_id))
            .map(|legs| {
                let status = classify(now, legs.outbound, legs.return_leg);
                BoardEntry {
                    bus_id: legs.outbound.bus_id.clone(),
                    plate: legs.outbound.plate.clone(),
                    bus_type: legs.outbound.bus_type,
                    status,
                }
            })
            .filter(|entry| filter.matches(&entry.status))
            .collect();

        entries.sort_by(|a, b| {
            a.status
                .status
                .order()
                .cmp(&b.status.status.order())
                .then(a.status.leg.departure.cmp(&b.status.leg.departure))
        });

        tracing::debug!(at = %now, buses = entries.len(), "built trip board");
        Self {
            generated_at: now,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buses in each status, in lifecycle order
    pub fn summary(&self) -> Vec<(TripStatus, usize)> {
        let mut counts: Vec<(TripStatus, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|(s, _)| *s == entry.status.status) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.status.status, 1)),
            }
        }
        counts.sort_by_key(|(s, _)| s.order());
        counts
    }
}

/// Track one physical bus at `now`
pub fn track_bus(schedule: &DailySchedule, bus_id: &str, now: NaiveDateTime) -> Result<BoardEntry> {
    let legs = schedule
        .bus_ids()
        .into_iter()
        .find(|id| id.eq_ignore_ascii_case(bus_id.trim()))
        .and_then(|id| schedule.legs_for_bus(id))
        .ok_or_else(|| BookingError::BusNotFound(bus_id.trim().to_string()))?;

    Ok(BoardEntry {
        bus_id: legs.outbound.bus_id.clone(),
        plate: legs.outbound.plate.clone(),
        bus_type: legs.outbound.bus_type,
        status: classify(now, legs.outbound, legs.return_leg),
    })
}

/// One-line description of where a bus is and what it does next
pub fn tracking_message(entry: &BoardEntry) -> String {
    let status = &entry.status;
    let leg = &status.leg;
    let plate = &entry.plate;
    match status.status {
        TripStatus::Scheduled => format!(
            "Bus {} is scheduled to depart {} at {}.",
            plate,
            status.current_origin,
            leg.departure_time()
        ),
        TripStatus::Travelling => format!(
            "Bus {} is travelling from {} to {}. Expected arrival: {}.",
            plate,
            status.current_origin,
            status.current_destination,
            leg.arrival_time()
        ),
        TripStatus::ParkedAtDestination => format!(
            "Bus {} is parked at {}. Next departure to {} at {}.",
            plate,
            status.current_origin,
            status.current_destination,
            leg.departure_time()
        ),
        TripStatus::Returning => format!(
            "Bus {} is returning from {} to {}. Expected arrival: {}.",
            plate,
            status.current_origin,
            status.current_destination,
            leg.arrival_time()
        ),
        TripStatus::CompletedForDay => format!(
            "Bus {} has completed its trips for the day. Parked at {}. \
             Next scheduled departure for {} is {} tomorrow.",
            plate,
            status.current_origin,
            status.current_destination,
            status.next_change_at.format("%H:%M")
        ),
    }
}
