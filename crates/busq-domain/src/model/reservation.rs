//! Reservation records kept in client-side storage

use busq_types::{BusType, PassengerCategory, PaymentType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::FareQuote;

/// Outcome of the mock payment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub payment_type: PaymentType,
    pub amount_paid: f64,
    /// Remaining amount payable to the conductor
    pub balance: f64,
}

/// Booking intent created at seat selection and confirmed by payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub passenger_name: String,
    pub category: PassengerCategory,
    pub trip_id: String,
    pub bus_id: String,
    pub bus_type: BusType,
    pub origin: String,
    /// Chosen drop-off stop
    pub drop_off: String,
    pub trip_date: NaiveDate,
    /// `HH:MM`
    pub departure_time: String,
    pub seat_numbers: Vec<String>,
    pub fare: FareQuote,
    #[serde(default)]
    pub payment: Option<PaymentSummary>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn is_paid(&self) -> bool {
        self.payment.is_some()
    }

    pub fn route_label(&self) -> String {
        format!("{} to {}", self.origin, self.drop_off)
    }
}
