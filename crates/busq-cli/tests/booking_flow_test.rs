//! End-to-end booking flow
//!
//! Library-level flow over a file-backed store, plus a smoke run of the
//! `busq` binary with config and data directories redirected to a temp dir.

use busq_app::app::{BookingRequest, BookingService, BoardFilter, TripBoard};
use busq_app::network::TransitNetwork;
use busq_app::repository::open_reservation_repo_at;
use busq_domain::repository::ReservationRepository;
use busq_types::{PassengerCategory, PaymentType, TripStatus};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

fn service_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    service_date().and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_book_pay_and_reopen_store() {
    let dir = TempDir::new().unwrap();
    let network = TransitNetwork::builtin();

    let board = TripBoard::build(&network.schedule(service_date()), at(1, 0), &BoardFilter::default());
    let first = &board.entries[0];
    assert_eq!(first.status.status, TripStatus::Scheduled);
    let trip_id = first.status.leg.id.clone();
    assert_eq!(trip_id, "TRAD-001-MtoC-202503140245");

    let reservation_id = {
        let service = BookingService::new(
            open_reservation_repo_at(dir.path().to_path_buf()).unwrap(),
            network.schedule(service_date()),
            network.fares.clone(),
        );
        let reservation = service
            .start_booking(
                &BookingRequest {
                    trip_id: trip_id.clone(),
                    passenger_name: "Maria Santos".to_string(),
                    category: PassengerCategory::Student,
                    drop_off: Some("Carcar City".to_string()),
                    seats: vec!["A1".to_string()],
                },
                at(1, 0),
            )
            .unwrap();
        assert!((reservation.fare.amount_due - 80.0).abs() < 0.01);
        reservation.id
    };

    // Payment happens in a later process against the same store
    let service = BookingService::new(
        open_reservation_repo_at(dir.path().to_path_buf()).unwrap(),
        network.schedule(service_date()),
        network.fares.clone(),
    );
    let paid = service.pay(PaymentType::Full).unwrap();
    assert_eq!(paid.id, reservation_id);
    assert!(service.repository().find_pending().unwrap().is_none());

    let repo = open_reservation_repo_at(dir.path().to_path_buf()).unwrap();
    let receipt = repo.find_confirmed(&reservation_id).unwrap().unwrap();
    let payment = receipt.payment.unwrap();
    assert!((payment.amount_paid - 80.0).abs() < 0.01);
    assert_eq!(payment.balance, 0.0);
}

#[cfg(target_os = "linux")]
mod binary {
    use std::path::Path;
    use std::process::{Command, Output};

    use tempfile::TempDir;

    fn busq(home: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_busq"))
            .args(args)
            .env("HOME", home)
            .env("XDG_CONFIG_HOME", home.join("config"))
            .env("XDG_DATA_HOME", home.join("data"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn json(output: &Output) -> serde_json::Value {
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    #[test]
    fn test_cli_booking_flow() {
        let home = TempDir::new().unwrap();
        let home = home.path();

        let booked = json(&busq(
            home,
            &[
                "--format", "json", "--date", "2025-03-14", "--at", "01:00",
                "book", "TRAD-001-MtoC-202503140245",
                "--name", "Maria Santos", "--category", "student",
                "--stop", "Carcar City", "--seat", "A1,B1",
            ],
        ));
        let id = booked["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("BQ-"));
        assert_eq!(booked["fare"]["amount_due"].as_f64(), Some(160.0));

        let paid = json(&busq(home, &["--format", "json", "pay", "deposit"]));
        assert_eq!(paid["id"].as_str(), Some(id.as_str()));
        assert_eq!(paid["payment"]["amount_paid"].as_f64(), Some(48.0));
        assert_eq!(paid["payment"]["balance"].as_f64(), Some(112.0));

        let receipt = busq(home, &["receipt", &id]);
        assert!(receipt.status.success());
        let text = String::from_utf8_lossy(&receipt.stdout);
        assert!(text.contains("Booking Confirmed!"));
        assert!(text.contains("Student discount (20%)"));

        let again = busq(home, &["pay", "full"]);
        assert!(!again.status.success());
        assert!(String::from_utf8_lossy(&again.stderr).contains("No pending reservation"));
    }

    #[test]
    fn test_cli_rejects_departed_trip() {
        let home = TempDir::new().unwrap();
        let output = busq(
            home.path(),
            &[
                "--date", "2025-03-14", "--at", "03:00",
                "book", "TRAD-001-MtoC-202503140245",
                "--name", "Late Passenger", "--seat", "A1",
            ],
        );
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("not bookable"));
    }

    #[test]
    fn test_cli_trip_board_json() {
        let home = TempDir::new().unwrap();
        let board = json(&busq(
            home.path(),
            &["--format", "json", "--date", "2025-03-14", "--at", "07:00", "trips"],
        ));
        let entries = board["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 8);
        let trad1 = entries
            .iter()
            .find(|e| e["bus_id"] == "TRAD-001")
            .unwrap();
        assert_eq!(trad1["status"], "ParkedAtDestination");
        assert_eq!(trad1["badge"], "yellow");
    }
}
