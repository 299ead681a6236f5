//! Booking Service - seat selection, payment and receipt lookup
//!
//! The workflow hands a reservation between steps through the repository:
//! 1. `start_booking` validates the request and stores a pending reservation
//! 2. `pay` settles the pending reservation and stores it as confirmed
//! 3. `receipt` loads the confirmed reservation by id

use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

use busq_domain::model::{DailySchedule, FareQuote, FareTable, Reservation, SeatLayout, TripLeg};
use busq_domain::repository::ReservationRepository;
use busq_domain::service::{
    calculate_fare, generate_seat_layout, is_on_route, leg_status, settle_payment,
    validate_selection,
};
use busq_types::{BookingError, PassengerCategory, PaymentType, Result, TripStatus};

/// Prefix of reservation ids
pub const RESERVATION_ID_PREFIX: &str = "BQ-";

/// Passenger input collected at seat selection
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub trip_id: String,
    pub passenger_name: String,
    pub category: PassengerCategory,
    /// Drop-off stop, the leg's destination when `None`
    pub drop_off: Option<String>,
    pub seats: Vec<String>,
}

/// Booking use cases over one day's schedule
pub struct BookingService<R> {
    repo: R,
    schedule: DailySchedule,
    fares: FareTable,
}

impl<R: ReservationRepository> BookingService<R> {
    pub fn new(repo: R, schedule: DailySchedule, fares: FareTable) -> Self {
        Self {
            repo,
            schedule,
            fares,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn schedule(&self) -> &DailySchedule {
        &self.schedule
    }

    pub fn find_trip(&self, trip_id: &str) -> Result<&TripLeg> {
        self.schedule
            .find_leg(trip_id.trim())
            .ok_or_else(|| BookingError::TripNotFound(trip_id.trim().to_string()).into())
    }

    /// Seat plan for the bus running `trip_id`
    pub fn seat_layout(&self, trip_id: &str) -> Result<SeatLayout> {
        let leg = self.find_trip(trip_id)?;
        Ok(generate_seat_layout(leg.bus_type))
    }

    /// Fare breakdown without creating a reservation
    pub fn quote(
        &self,
        trip_id: &str,
        drop_off: Option<&str>,
        category: PassengerCategory,
        seat_count: u32,
    ) -> Result<FareQuote> {
        let leg = self.find_trip(trip_id)?;
        let drop_off = self.resolve_drop_off(leg, drop_off)?;
        Ok(calculate_fare(leg, Some(&self.fares), &drop_off, category, seat_count))
    }

    /// Validate the request and store it as the pending reservation
    pub fn start_booking(&self, request: &BookingRequest, now: NaiveDateTime) -> Result<Reservation> {
        let leg = self.find_trip(&request.trip_id)?;

        let status = leg_status(now, leg);
        if status != TripStatus::Scheduled {
            return Err(BookingError::TripNotBookable {
                trip_id: leg.id.clone(),
                status: status.label().to_string(),
            }
            .into());
        }

        let passenger_name = request.passenger_name.trim();
        if passenger_name.is_empty() {
            return Err(BookingError::MissingPassengerName.into());
        }

        let layout = generate_seat_layout(leg.bus_type);
        let seats = validate_selection(&layout, &request.seats)?;
        let requested = seats.len() as u32;
        if requested > leg.available_seats {
            return Err(BookingError::InsufficientSeats {
                requested,
                available: leg.available_seats,
            }
            .into());
        }

        let drop_off = self.resolve_drop_off(leg, request.drop_off.as_deref())?;
        let fare = calculate_fare(leg, Some(&self.fares), &drop_off, request.category, requested);

        let reservation = Reservation {
            id: new_reservation_id(),
            passenger_name: passenger_name.to_string(),
            category: request.category,
            trip_id: leg.id.clone(),
            bus_id: leg.bus_id.clone(),
            bus_type: leg.bus_type,
            origin: leg.origin.clone(),
            drop_off,
            trip_date: leg.trip_date(),
            departure_time: leg.departure_time(),
            seat_numbers: seats,
            fare,
            payment: None,
            created_at: Utc::now(),
            paid_at: None,
        };

        self.repo.save_pending(&reservation)?;
        tracing::info!(
            id = %reservation.id,
            trip = %reservation.trip_id,
            seats = reservation.seat_numbers.len(),
            amount_due = reservation.fare.amount_due,
            "reservation pending payment"
        );
        Ok(reservation)
    }

    /// The reservation awaiting payment
    pub fn pending(&self) -> Result<Reservation> {
        self.repo
            .find_pending()?
            .ok_or_else(|| BookingError::NoPendingReservation.into())
    }

    /// Settle the pending reservation and move it to confirmed
    pub fn pay(&self, payment_type: PaymentType) -> Result<Reservation> {
        let mut reservation = self.pending()?;

        reservation.payment = Some(settle_payment(reservation.fare.amount_due, payment_type));
        reservation.paid_at = Some(Utc::now());

        self.repo.save_confirmed(&reservation)?;
        self.repo.clear_pending()?;
        tracing::info!(id = %reservation.id, payment = %payment_type, "reservation confirmed");
        Ok(reservation)
    }

    /// Confirmed reservation with this id
    pub fn receipt(&self, reservation_id: &str) -> Result<Reservation> {
        self.repo
            .find_confirmed(reservation_id)?
            .ok_or_else(|| BookingError::ReservationNotFound(reservation_id.trim().to_string()).into())
    }

    fn resolve_drop_off(&self, leg: &TripLeg, drop_off: Option<&str>) -> Result<String> {
        let drop_off = match drop_off.map(str::trim).filter(|s| !s.is_empty()) {
            Some(stop) => stop,
            None => return Ok(leg.destination.clone()),
        };

        if !is_on_route(leg, Some(&self.fares), drop_off) {
            return Err(BookingError::UnknownStop {
                stop: drop_off.to_string(),
                route: leg.direction.to_string(),
            }
            .into());
        }

        // Canonical spelling from the fare table
        Ok(self
            .fares
            .find_stop(leg.direction, drop_off)
            .map(|stop| stop.name.clone())
            .unwrap_or_else(|| leg.destination.clone()))
    }
}

fn new_reservation_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}{}", RESERVATION_ID_PREFIX, uuid[..8].to_uppercase())
}
