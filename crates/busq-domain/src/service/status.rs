//! Time-based status of a physical bus over its daily round trip

use busq_types::{BadgeColor, TripStatus};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::model::TripLeg;

/// Classified state of one physical bus at an instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStatus {
    pub status: TripStatus,
    pub badge: BadgeColor,
    /// Leg shown for the bus in its current state
    pub leg: TripLeg,
    pub current_origin: String,
    pub current_destination: String,
    /// Next instant at which the status changes
    pub next_change_at: NaiveDateTime,
}

impl BusStatus {
    fn new(status: TripStatus, leg: &TripLeg, next_change_at: NaiveDateTime) -> Self {
        Self {
            status,
            badge: status.badge(),
            leg: leg.clone(),
            current_origin: leg.origin.clone(),
            current_destination: leg.destination.clone(),
            next_change_at,
        }
    }

    /// Bus waiting at the terminal where `leg` ends
    fn at_end_of(status: TripStatus, leg: &TripLeg, next_change_at: NaiveDateTime) -> Self {
        Self {
            current_origin: leg.destination.clone(),
            current_destination: leg.origin.clone(),
            ..Self::new(status, leg, next_change_at)
        }
    }

    /// Human readable whereabouts of the bus
    pub fn location(&self) -> String {
        match self.status {
            TripStatus::Scheduled => format!("At {} terminal", self.current_origin),
            TripStatus::Travelling | TripStatus::Returning => {
                format!("En route to {}", self.current_destination)
            }
            TripStatus::ParkedAtDestination => format!("Parked at {}", self.current_origin),
            TripStatus::CompletedForDay => format!("At {} terminal", self.current_origin),
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.status == TripStatus::Scheduled
    }
}

/// Classify a bus from its outbound leg and optional return leg.
///
/// Boundaries are half-open: a bus is Travelling from the exact departure
/// instant and stops Travelling at the exact arrival instant.
pub fn classify(now: NaiveDateTime, outbound: &TripLeg, return_leg: Option<&TripLeg>) -> BusStatus {
    if now < outbound.departure {
        return BusStatus::new(TripStatus::Scheduled, outbound, outbound.departure);
    }
    if now < outbound.arrival {
        return BusStatus::new(TripStatus::Travelling, outbound, outbound.arrival);
    }

    let next_day = outbound.departure + Duration::days(1);
    let Some(ret) = return_leg else {
        return BusStatus::at_end_of(TripStatus::CompletedForDay, outbound, next_day);
    };

    if now < ret.departure {
        BusStatus::new(TripStatus::ParkedAtDestination, ret, ret.departure)
    } else if now < ret.arrival {
        BusStatus::new(TripStatus::Returning, ret, ret.arrival)
    } else {
        BusStatus::at_end_of(TripStatus::CompletedForDay, ret, next_day)
    }
}

/// Status of a single leg on its own (one-way form)
pub fn leg_status(now: NaiveDateTime, leg: &TripLeg) -> TripStatus {
    classify(now, leg, None).status
}

/// A leg takes bookings only before it departs
pub fn is_bookable(now: NaiveDateTime, leg: &TripLeg) -> bool {
    leg_status(now, leg) == TripStatus::Scheduled
}
