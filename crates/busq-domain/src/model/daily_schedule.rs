//! A day's worth of trip legs

use chrono::NaiveDate;
use serde::Serialize;

use super::TripLeg;

/// Immutable set of trip legs generated for one service date
#[derive(Debug, Clone, Serialize)]
pub struct DailySchedule {
    service_date: NaiveDate,
    legs: Vec<TripLeg>,
}

/// The legs one physical bus runs on a service date
#[derive(Debug, Clone, Copy)]
pub struct BusLegs<'a> {
    pub outbound: &'a TripLeg,
    pub return_leg: Option<&'a TripLeg>,
}

impl DailySchedule {
    /// Build a schedule; legs are ordered by departure (stable for ties)
    pub fn new(service_date: NaiveDate, mut legs: Vec<TripLeg>) -> Self {
        legs.sort_by_key(|leg| leg.departure);
        Self { service_date, legs }
    }

    pub fn service_date(&self) -> NaiveDate {
        self.service_date
    }

    pub fn legs(&self) -> &[TripLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn find_leg(&self, leg_id: &str) -> Option<&TripLeg> {
        self.legs.iter().find(|leg| leg.id == leg_id)
    }

    /// First leg of the bus is the outbound one, the next (if any) is the return
    pub fn legs_for_bus(&self, bus_id: &str) -> Option<BusLegs<'_>> {
        let mut legs = self.legs.iter().filter(|leg| leg.bus_id == bus_id);
        let outbound = legs.next()?;
        Some(BusLegs {
            outbound,
            return_leg: legs.next(),
        })
    }

    /// Bus ids in order of their first departure
    pub fn bus_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for leg in &self.legs {
            if !ids.contains(&leg.bus_id.as_str()) {
                ids.push(&leg.bus_id);
            }
        }
        ids
    }
}
