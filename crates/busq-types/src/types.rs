//! Shared enums for buses, routes, passengers and trip status

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical bus class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum BusType {
    /// Non-airconditioned, 2-aisle-2 seating
    #[value(alias = "trad")]
    Traditional,
    /// Airconditioned, 2-aisle-3 seating
    #[value(alias = "ac")]
    Airconditioned,
}

impl BusType {
    /// Seat capacity including the rear bench
    pub fn total_seats(&self) -> u32 {
        match self {
            BusType::Traditional => 53,
            BusType::Airconditioned => 65,
        }
    }

    /// Full-route base fare for one seat
    pub fn base_price(&self) -> f64 {
        match self {
            BusType::Traditional => 180.0,
            BusType::Airconditioned => 200.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusType::Traditional => "Traditional",
            BusType::Airconditioned => "Airconditioned",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of travel along the Mantalongon - Cebu City corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "Mantalongon_to_Cebu")]
    #[value(name = "to-cebu", alias = "mtoc")]
    MantalongonToCebu,
    #[serde(rename = "Cebu_to_Mantalongon")]
    #[value(name = "to-mantalongon", alias = "ctom")]
    CebuToMantalongon,
}

impl Direction {
    /// Short code used in trip leg identifiers
    pub fn code(&self) -> &'static str {
        match self {
            Direction::MantalongonToCebu => "MtoC",
            Direction::CebuToMantalongon => "CtoM",
        }
    }

    pub fn origin(&self) -> &'static str {
        match self {
            Direction::MantalongonToCebu => "Mantalongon",
            Direction::CebuToMantalongon => "Cebu City",
        }
    }

    pub fn destination(&self) -> &'static str {
        match self {
            Direction::MantalongonToCebu => "Cebu City",
            Direction::CebuToMantalongon => "Mantalongon",
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::MantalongonToCebu => Direction::CebuToMantalongon,
            Direction::CebuToMantalongon => Direction::MantalongonToCebu,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.origin(), self.destination())
    }
}

/// Passenger classification that decides discount eligibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum PassengerCategory {
    #[default]
    Regular,
    Student,
    Senior,
    #[serde(rename = "PWD")]
    #[value(name = "pwd")]
    Pwd,
}

impl PassengerCategory {
    /// Flat discount rate off the regular per-seat fare
    pub const DISCOUNT_RATE: f64 = 0.20;

    pub fn is_discounted(&self) -> bool {
        !matches!(self, PassengerCategory::Regular)
    }

    pub fn discount_rate(&self) -> f64 {
        if self.is_discounted() {
            Self::DISCOUNT_RATE
        } else {
            0.0
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PassengerCategory::Regular => "Regular",
            PassengerCategory::Student => "Student",
            PassengerCategory::Senior => "Senior",
            PassengerCategory::Pwd => "PWD",
        }
    }
}

impl fmt::Display for PassengerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mock payment option
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// 30% deposit, balance paid to the conductor
    Deposit,
    Full,
}

impl PaymentType {
    pub fn rate(&self) -> f64 {
        match self {
            PaymentType::Deposit => 0.30,
            PaymentType::Full => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Deposit => "30% Deposit",
            PaymentType::Full => "Full Payment",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a bus (or a single leg) at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    Scheduled,
    Travelling,
    /// Arrived at the far terminal, waiting for the return departure
    ParkedAtDestination,
    Returning,
    CompletedForDay,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Scheduled => "Scheduled",
            TripStatus::Travelling => "Travelling",
            TripStatus::ParkedAtDestination => "Parked at Destination",
            TripStatus::Returning => "Returning",
            TripStatus::CompletedForDay => "Completed for Day",
        }
    }

    /// Position in the daily lifecycle, also used as trip board sort key
    pub fn order(&self) -> u8 {
        match self {
            TripStatus::Scheduled => 1,
            TripStatus::Travelling => 2,
            TripStatus::ParkedAtDestination => 3,
            TripStatus::Returning => 4,
            TripStatus::CompletedForDay => 5,
        }
    }

    pub fn badge(&self) -> BadgeColor {
        match self {
            TripStatus::Scheduled => BadgeColor::Blue,
            TripStatus::Travelling => BadgeColor::Green,
            TripStatus::ParkedAtDestination => BadgeColor::Yellow,
            TripStatus::Returning => BadgeColor::Orange,
            TripStatus::CompletedForDay => BadgeColor::Gray,
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation key for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Green,
    Yellow,
    Orange,
    Gray,
}

impl BadgeColor {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "blue",
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Gray => "gray",
        }
    }
}
