//! Output formatting module

use busq_app::app::{tracking_message, BoardEntry, TripBoard};
use busq_domain::model::{DailySchedule, FareQuote, FareSource, FareStop, Reservation, SeatLayout};
use busq_domain::service::leg_status;
use busq_types::{BusType, Direction, OutputFormat, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn badge(entry: &BoardEntry) -> String {
    format!("[{}]", entry.status.badge.label())
}

pub fn output_board(output_format: OutputFormat, board: &TripBoard) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(board);
    }

    println!("\nTrip Board ({})", board.generated_at.format("%Y-%m-%d %H:%M"));
    println!("{}", "=".repeat(108));
    println!(
        "{:<10} {:<16} {:<14} {:<32} {:<6} {:<6} {:<22}",
        "Bus", "Plate", "Type", "Current Leg", "Dep", "Arr", "Status"
    );
    println!("{}", "-".repeat(108));

    for entry in &board.entries {
        let leg = &entry.status.leg;
        println!(
            "{:<10} {:<16} {:<14} {:<32} {:<6} {:<6} {} {}",
            entry.bus_id,
            entry.plate,
            entry.bus_type.label(),
            leg.direction.to_string(),
            leg.departure_time(),
            leg.arrival_time(),
            entry.status.status.label(),
            badge(entry),
        );
    }

    println!("{}", "-".repeat(108));
    if board.is_empty() {
        println!("No buses match the filter.");
    } else {
        let summary: Vec<String> = board
            .summary()
            .iter()
            .map(|(status, n)| format!("{}: {}", status.label(), n))
            .collect();
        println!("{}", summary.join("  "));
    }

    Ok(())
}

pub fn output_schedule(
    output_format: OutputFormat,
    schedule: &DailySchedule,
    now: NaiveDateTime,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(schedule);
    }

    println!("\nSchedule for {}", schedule.service_date());
    println!("{}", "=".repeat(104));
    println!(
        "{:<30} {:<32} {:<6} {:<6} {:<10} {:>7} {:>9} {:<12}",
        "Trip", "Route", "Dep", "Arr", "Type", "Price", "Seats", "Status"
    );
    println!("{}", "-".repeat(104));

    for leg in schedule.legs() {
        println!(
            "{:<30} {:<32} {:<6} {:<6} {:<10} {:>7.2} {:>4}/{:<4} {:<12}",
            leg.id,
            leg.direction.to_string(),
            leg.departure_time(),
            leg.arrival_time(),
            match leg.bus_type {
                BusType::Traditional => "Trad",
                BusType::Airconditioned => "AC",
            },
            leg.price,
            leg.available_seats,
            leg.total_seats,
            leg_status(now, leg).label(),
        );
    }

    println!("{}", "-".repeat(104));
    println!("{} trips", schedule.len());
    Ok(())
}

#[derive(Serialize)]
struct TrackingView<'a> {
    #[serde(flatten)]
    entry: &'a BoardEntry,
    location: String,
    message: String,
}

pub fn output_tracking(output_format: OutputFormat, entry: &BoardEntry) -> Result<()> {
    let message = tracking_message(entry);
    if output_format == OutputFormat::Json {
        return print_json(&TrackingView {
            entry,
            location: entry.status.location(),
            message,
        });
    }

    let status = &entry.status;
    println!("\nBus {} ({}, {})", entry.bus_id, entry.plate, entry.bus_type.label());
    println!("===============");
    println!("Status:          {} {}", status.status.label(), badge(entry));
    println!("Location:        {}", status.location());
    println!("Current leg:     {}", status.leg.id);
    println!(
        "Next change:     {}",
        status.next_change_at.format("%Y-%m-%d %H:%M")
    );
    println!("\n{}", message);
    Ok(())
}

pub fn output_seats(output_format: OutputFormat, trip_id: &str, layout: &SeatLayout) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(layout);
    }

    println!("\nSeat map for {} ({})", trip_id, layout.bus_type.label());
    println!("Available: {} of {}   [xx] = reserved", layout.available_count(), layout.total());
    println!("          FRONT");

    for row in &layout.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(seat) if seat.is_available() => format!("{:<4}", seat.id),
                Some(_) => "[xx]".to_string(),
                None => "  ".to_string(),
            })
            .collect();
        println!("  {}", cells.join(" "));
    }

    let rear: Vec<String> = layout
        .rear_bench
        .iter()
        .map(|seat| {
            if seat.is_available() {
                format!("{:<4}", seat.id)
            } else {
                "[xx]".to_string()
            }
        })
        .collect();
    println!("  {}", rear.join(" "));
    println!("          REAR");
    Ok(())
}

pub fn output_stops(output_format: OutputFormat, direction: Direction, stops: &[FareStop]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(stops);
    }

    let fare = |f: Option<f64>| f.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "base".to_string());

    println!("\nStops: {}", direction);
    println!("{}", "=".repeat(44));
    println!("{:<20} {:>10} {:>12}", "Stop", "Trad", "AC");
    println!("{}", "-".repeat(44));
    for stop in stops {
        println!(
            "{:<20} {:>10} {:>12}",
            stop.name,
            fare(stop.traditional),
            fare(stop.airconditioned)
        );
    }
    Ok(())
}

fn print_fare_lines(fare: &FareQuote) {
    println!(
        "Fare:            {} x PHP {:.2} = PHP {:.2}",
        fare.seat_count, fare.regular_fare_per_seat, fare.regular_fare_total
    );
    if fare.discount_applied() {
        println!(
            "Discount:        {} 20% (-PHP {:.2})",
            fare.category.label(),
            fare.discount_total
        );
    }
    println!("Amount due:      PHP {:.2}", fare.amount_due);
    if fare.source == FareSource::Fallback {
        println!("Note:            no fare listed for {}, base fare charged", fare.drop_off);
    }
}

pub fn output_quote(output_format: OutputFormat, trip_id: &str, quote: &FareQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(quote);
    }

    println!("\nFare Quote");
    println!("==========");
    println!("Trip:            {}", trip_id);
    println!("Drop-off:        {}", quote.drop_off);
    println!("Passenger type:  {}", quote.category.label());
    print_fare_lines(quote);
    Ok(())
}

pub fn output_reservation(output_format: OutputFormat, reservation: &Reservation) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(reservation);
    }

    println!("\nReservation {}", reservation.id);
    println!("================");
    println!("Passenger:       {} ({})", reservation.passenger_name, reservation.category.label());
    println!("Trip:            {}", reservation.trip_id);
    println!("Route:           {}", reservation.route_label());
    println!(
        "Departure:       {} {}",
        reservation.trip_date, reservation.departure_time
    );
    println!("Seats:           {}", reservation.seat_numbers.join(", "));
    print_fare_lines(&reservation.fare);

    match reservation.payment {
        Some(ref payment) => {
            println!("Paid:            PHP {:.2} ({})", payment.amount_paid, payment.payment_type.label());
            if payment.balance > 0.0 {
                println!("Balance:         PHP {:.2} (pay the conductor)", payment.balance);
            }
        }
        None => {
            println!("\nPending payment. Run `busq pay deposit` or `busq pay full`.");
        }
    }
    Ok(())
}
