//! Fare calculation with passenger discounts

use busq_types::PassengerCategory;

use crate::model::{FareQuote, FareSource, FareTable, TripLeg};

/// Round to centavos
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// True when `drop_off` is the leg's final stop
pub fn is_final_destination(leg: &TripLeg, drop_off: &str) -> bool {
    leg.destination.eq_ignore_ascii_case(drop_off.trim())
}

/// True when `drop_off` is a known stop for the leg's direction
pub fn is_on_route(leg: &TripLeg, table: Option<&FareTable>, drop_off: &str) -> bool {
    is_final_destination(leg, drop_off)
        || table
            .and_then(|t| t.find_stop(leg.direction, drop_off))
            .is_some()
}

/// Regular (undiscounted) per-seat fare and where it came from
pub fn regular_fare(
    leg: &TripLeg,
    table: Option<&FareTable>,
    drop_off: &str,
) -> (f64, FareSource) {
    if let Some(fare) = table.and_then(|t| t.lookup(leg.direction, drop_off, leg.bus_type)) {
        return (fare, FareSource::Table);
    }

    if is_final_destination(leg, drop_off) {
        return (leg.price, FareSource::BaseRoute);
    }

    tracing::warn!(
        trip = %leg.id,
        drop_off,
        bus_type = %leg.bus_type,
        "no fare entry for drop-off, charging base price"
    );
    (leg.price, FareSource::Fallback)
}

/// Compute the fare breakdown for `seat_count` seats on `leg`
pub fn calculate_fare(
    leg: &TripLeg,
    table: Option<&FareTable>,
    drop_off: &str,
    category: PassengerCategory,
    seat_count: u32,
) -> FareQuote {
    let (regular, source) = regular_fare(leg, table, drop_off);
    let per_seat = round_currency(regular * (1.0 - category.discount_rate()));
    let seats = f64::from(seat_count);

    let regular_fare_total = round_currency(regular * seats);
    let amount_due = round_currency(per_seat * seats);

    FareQuote {
        drop_off: drop_off.trim().to_string(),
        category,
        seat_count,
        source,
        regular_fare_per_seat: round_currency(regular),
        fare_per_seat: per_seat,
        regular_fare_total,
        discount_total: round_currency(regular_fare_total - amount_due),
        amount_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FareStop;
    use busq_types::{BusType, Direction};
    use chrono::NaiveDate;

    fn leg(bus_type: BusType) -> TripLeg {
        let departure = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(2, 45, 0)
            .unwrap();
        TripLeg {
            id: "TRAD-001-MtoC-202503140245".to_string(),
            bus_id: "TRAD-001".to_string(),
            direction: Direction::MantalongonToCebu,
            origin: "Mantalongon".to_string(),
            destination: "Cebu City".to_string(),
            departure,
            arrival: departure + chrono::Duration::minutes(240),
            bus_type,
            price: bus_type.base_price(),
            total_seats: bus_type.total_seats(),
            available_seats: 26,
            travel_duration_mins: 240,
            layover_mins: 60,
            plate: "BUS-MTC-0245".to_string(),
        }
    }

    fn table() -> FareTable {
        FareTable::new().with_route(
            Direction::MantalongonToCebu,
            vec![
                FareStop::new("Dalaguete", 40.0, 50.0),
                FareStop::new("Carcar City", 100.0, 120.0),
                FareStop::new("Minglanilla", 155.0, 175.0),
                FareStop::unpriced("Cebu City"),
            ],
        )
    }

    #[test]
    fn test_student_discount() {
        let quote = calculate_fare(
            &leg(BusType::Traditional),
            Some(&table()),
            "Carcar City",
            PassengerCategory::Student,
            1,
        );
        assert_eq!(quote.source, FareSource::Table);
        assert!((quote.regular_fare_per_seat - 100.0).abs() < 0.01);
        assert!((quote.amount_due - 80.0).abs() < 0.01);
        assert!((quote.discount_total - 20.0).abs() < 0.01);
        assert!(quote.discount_applied());
    }

    #[test]
    fn test_discounted_categories_pay_eighty_percent() {
        let table = table();
        for category in [
            PassengerCategory::Student,
            PassengerCategory::Senior,
            PassengerCategory::Pwd,
        ] {
            let quote = calculate_fare(
                &leg(BusType::Airconditioned),
                Some(&table),
                "Minglanilla",
                category,
                1,
            );
            assert!((quote.fare_per_seat - 140.0).abs() < 0.01, "{}", category);
            assert!((quote.discount_per_seat() - 35.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_regular_pays_full_fare() {
        let quote = calculate_fare(
            &leg(BusType::Traditional),
            Some(&table()),
            "Dalaguete",
            PassengerCategory::Regular,
            1,
        );
        assert!((quote.amount_due - 40.0).abs() < 0.01);
        assert_eq!(quote.discount_total, 0.0);
        assert!(!quote.discount_applied());
    }

    #[test]
    fn test_totals_scale_with_seats() {
        let quote = calculate_fare(
            &leg(BusType::Traditional),
            Some(&table()),
            "Minglanilla",
            PassengerCategory::Senior,
            3,
        );
        assert!((quote.regular_fare_total - 465.0).abs() < 0.01);
        assert!((quote.amount_due - 372.0).abs() < 0.01);
        assert!((quote.discount_total - 93.0).abs() < 0.01);
    }

    #[test]
    fn test_final_destination_uses_base_price() {
        let quote = calculate_fare(
            &leg(BusType::Airconditioned),
            Some(&table()),
            "Cebu City",
            PassengerCategory::Regular,
            2,
        );
        assert_eq!(quote.source, FareSource::BaseRoute);
        assert!((quote.amount_due - 400.0).abs() < 0.01);

        let (fare, source) = regular_fare(&leg(BusType::Traditional), None, "cebu city");
        assert_eq!(source, FareSource::BaseRoute);
        assert!((fare - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_unknown_intermediate_stop_falls_back() {
        let (fare, source) = regular_fare(&leg(BusType::Traditional), Some(&table()), "Sibonga");
        assert_eq!(source, FareSource::Fallback);
        assert!((fare - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_is_on_route() {
        let leg = leg(BusType::Traditional);
        let table = table();
        assert!(is_on_route(&leg, Some(&table), "carcar city"));
        assert!(is_on_route(&leg, None, "Cebu City"));
        assert!(!is_on_route(&leg, Some(&table), "Moalboal"));
        assert!(!is_on_route(&leg, None, "Dalaguete"));
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(12.346), 12.35);
        assert_eq!(round_currency(99.999), 100.0);
        assert_eq!(round_currency(0.0), 0.0);
    }
}
