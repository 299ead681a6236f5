//! Fare table and fare quote types

use busq_types::{BusType, Direction, PassengerCategory};
use serde::{Deserialize, Serialize};

/// A drop-off point and its regular per-seat fare by bus type.
/// A missing fare means the table has no price for that combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareStop {
    pub name: String,
    #[serde(default)]
    pub traditional: Option<f64>,
    #[serde(default)]
    pub airconditioned: Option<f64>,
}

impl FareStop {
    pub fn new(name: &str, traditional: f64, airconditioned: f64) -> Self {
        Self {
            name: name.to_string(),
            traditional: Some(traditional),
            airconditioned: Some(airconditioned),
        }
    }

    /// A stop without fare entries (priced at the leg's base fare)
    pub fn unpriced(name: &str) -> Self {
        Self {
            name: name.to_string(),
            traditional: None,
            airconditioned: None,
        }
    }

    pub fn fare_for(&self, bus_type: BusType) -> Option<f64> {
        match bus_type {
            BusType::Traditional => self.traditional,
            BusType::Airconditioned => self.airconditioned,
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// Ordered drop-off stops for one direction of travel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRoute {
    pub direction: Direction,
    pub stops: Vec<FareStop>,
}

/// Distance-based fares keyed by direction, drop-off stop and bus type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    #[serde(default)]
    pub routes: Vec<FareRoute>,
}

impl FareTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, direction: Direction, stops: Vec<FareStop>) -> Self {
        self.routes.retain(|route| route.direction != direction);
        self.routes.push(FareRoute { direction, stops });
        self
    }

    /// Drop-off stops in travel order, empty when the direction has no route
    pub fn stops(&self, direction: Direction) -> &[FareStop] {
        self.routes
            .iter()
            .find(|route| route.direction == direction)
            .map(|route| route.stops.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_stop(&self, direction: Direction, name: &str) -> Option<&FareStop> {
        self.stops(direction).iter().find(|stop| stop.matches(name))
    }

    pub fn lookup(&self, direction: Direction, stop: &str, bus_type: BusType) -> Option<f64> {
        self.find_stop(direction, stop)
            .and_then(|stop| stop.fare_for(bus_type))
    }
}

/// Where the regular fare of a quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareSource {
    /// Fare table entry for the drop-off stop
    Table,
    /// Drop-off is the final destination, leg base price
    BaseRoute,
    /// No table entry for an intermediate stop, leg base price used anyway
    Fallback,
}

/// Fare breakdown for one booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub drop_off: String,
    pub category: PassengerCategory,
    pub seat_count: u32,
    pub source: FareSource,
    pub regular_fare_per_seat: f64,
    pub fare_per_seat: f64,
    pub regular_fare_total: f64,
    pub discount_total: f64,
    pub amount_due: f64,
}

impl FareQuote {
    pub fn discount_applied(&self) -> bool {
        self.category.is_discounted()
    }

    pub fn discount_per_seat(&self) -> f64 {
        self.regular_fare_per_seat - self.fare_per_seat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FareTable {
        FareTable::new().with_route(
            Direction::MantalongonToCebu,
            vec![
                FareStop::new("Argao", 60.0, 75.0),
                FareStop {
                    name: "Sibonga".to_string(),
                    traditional: Some(85.0),
                    airconditioned: None,
                },
                FareStop::unpriced("Cebu City"),
            ],
        )
    }

    #[test]
    fn test_lookup_by_bus_type() {
        let table = table();
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "Argao", BusType::Traditional),
            Some(60.0)
        );
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "argao ", BusType::Airconditioned),
            Some(75.0)
        );
    }

    #[test]
    fn test_lookup_misses() {
        let table = table();
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "Sibonga", BusType::Airconditioned),
            None
        );
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "Cebu City", BusType::Traditional),
            None
        );
        assert_eq!(
            table.lookup(Direction::CebuToMantalongon, "Argao", BusType::Traditional),
            None
        );
        assert!(table.stops(Direction::CebuToMantalongon).is_empty());
    }

    #[test]
    fn test_with_route_replaces_direction() {
        let table = table().with_route(
            Direction::MantalongonToCebu,
            vec![FareStop::unpriced("Cebu City")],
        );
        assert_eq!(table.routes.len(), 1);
        assert_eq!(table.stops(Direction::MantalongonToCebu).len(), 1);
    }
}
