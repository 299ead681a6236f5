//! Booking receipt rendering (plain text and HTML)

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use busq_domain::model::Reservation;
use busq_types::Result;

const CURRENCY: &str = "PHP";

fn money(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY, amount)
}

/// Passenger and trip rows shown on every receipt
fn detail_rows(reservation: &Reservation) -> Vec<(&'static str, String)> {
    vec![
        ("Reservation ID", reservation.id.clone()),
        ("Passenger Name", reservation.passenger_name.clone()),
        ("Passenger Type", reservation.category.label().to_string()),
        ("Route", reservation.route_label()),
        ("Your Destination", reservation.drop_off.clone()),
        ("Bus", reservation.bus_id.clone()),
        ("Bus Type", reservation.bus_type.label().to_string()),
        ("Departure Date", reservation.trip_date.format("%Y-%m-%d").to_string()),
        ("Departure Time", reservation.departure_time.clone()),
        ("Seat Number(s)", reservation.seat_numbers.join(", ")),
    ]
}

/// Fare and payment rows
fn amount_rows(reservation: &Reservation) -> Vec<(String, String)> {
    let fare = &reservation.fare;
    let mut rows = vec![(
        format!(
            "Fare ({} x {})",
            fare.seat_count,
            money(fare.regular_fare_per_seat)
        ),
        money(fare.regular_fare_total),
    )];

    if fare.discount_applied() {
        rows.push((
            format!("{} discount (20%)", fare.category.label()),
            format!("-{}", money(fare.discount_total)),
        ));
    }
    rows.push(("Total Amount".to_string(), money(fare.amount_due)));

    if let Some(ref payment) = reservation.payment {
        rows.push(("Payment".to_string(), payment.payment_type.label().to_string()));
        rows.push(("Amount Paid".to_string(), money(payment.amount_paid)));
        if payment.balance > 0.0 {
            rows.push(("Remaining Balance".to_string(), money(payment.balance)));
        }
    }
    rows
}

fn balance_note(reservation: &Reservation) -> Option<String> {
    reservation
        .payment
        .as_ref()
        .filter(|p| p.balance > 0.0)
        .map(|p| {
            format!(
                "Please pay the remaining balance of {} to the conductor upon boarding.",
                money(p.balance)
            )
        })
}

fn title(reservation: &Reservation) -> &'static str {
    if reservation.is_paid() {
        "Booking Confirmed!"
    } else {
        "Booking Pending Payment"
    }
}

/// Render a receipt as aligned plain text
pub fn render_receipt_text(reservation: &Reservation) -> String {
    let details = detail_rows(reservation);
    let amounts = amount_rows(reservation);
    let width = details
        .iter()
        .map(|(label, _)| label.len())
        .chain(amounts.iter().map(|(label, _)| label.len()))
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    let heading = title(reservation);
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", "=".repeat(heading.len()));
    for (label, value) in &details {
        let _ = writeln!(out, "{:<width$} {}", format!("{}:", label), value, width = width);
    }
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (label, value) in &amounts {
        let _ = writeln!(out, "{:<width$} {}", format!("{}:", label), value, width = width);
    }
    if let Some(note) = balance_note(reservation) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", note);
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a standalone HTML receipt page
pub fn render_receipt_html(reservation: &Reservation) -> String {
    let mut out = String::new();
    let heading = title(reservation);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>Receipt {}</title>", escape_html(&reservation.id));
    let _ = writeln!(
        out,
        "<style>body{{font-family:sans-serif;max-width:32em;margin:2em auto}}\
         td{{padding:4px 8px}}td.v{{text-align:right;font-weight:bold}}\
         tr.total td{{border-top:1px solid #999}}</style>"
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", heading);
    let _ = writeln!(out, "<table>");
    for (label, value) in detail_rows(reservation) {
        let _ = writeln!(
            out,
            "<tr><td>{}:</td><td class=\"v\">{}</td></tr>",
            label,
            escape_html(&value)
        );
    }
    let _ = writeln!(out, "</table>");
    let _ = writeln!(out, "<table>");
    for (label, value) in amount_rows(reservation) {
        let class = if label == "Total Amount" { " class=\"total\"" } else { "" };
        let _ = writeln!(
            out,
            "<tr{}><td>{}:</td><td class=\"v\">{}</td></tr>",
            class,
            escape_html(&label),
            escape_html(&value)
        );
    }
    let _ = writeln!(out, "</table>");
    if let Some(note) = balance_note(reservation) {
        let _ = writeln!(out, "<p>{}</p>", escape_html(&note));
    }
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

/// Write the HTML receipt to `output_path`
pub fn export_receipt_html(reservation: &Reservation, output_path: &Path) -> Result<()> {
    fs::write(output_path, render_receipt_html(reservation))?;
    tracing::info!(id = %reservation.id, path = %output_path.display(), "receipt exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use busq_domain::model::{FareQuote, FareSource, PaymentSummary};
    use busq_types::{BusType, PassengerCategory, PaymentType};
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn reservation(category: PassengerCategory, payment: Option<PaymentSummary>) -> Reservation {
        let discounted = category.is_discounted();
        Reservation {
            id: "BQ-1A2B3C4D".to_string(),
            passenger_name: "Juan <dela> Cruz".to_string(),
            category,
            trip_id: "TRAD-001-MtoC-202503140245".to_string(),
            bus_id: "TRAD-001".to_string(),
            bus_type: BusType::Traditional,
            origin: "Mantalongon".to_string(),
            drop_off: "Carcar City".to_string(),
            trip_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            departure_time: "02:45".to_string(),
            seat_numbers: vec!["A1".to_string(), "B1".to_string()],
            fare: FareQuote {
                drop_off: "Carcar City".to_string(),
                category,
                seat_count: 2,
                source: FareSource::Table,
                regular_fare_per_seat: 100.0,
                fare_per_seat: if discounted { 80.0 } else { 100.0 },
                regular_fare_total: 200.0,
                discount_total: if discounted { 40.0 } else { 0.0 },
                amount_due: if discounted { 160.0 } else { 200.0 },
            },
            payment,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    fn deposit() -> Option<PaymentSummary> {
        Some(PaymentSummary {
            payment_type: PaymentType::Deposit,
            amount_paid: 48.0,
            balance: 112.0,
        })
    }

    #[test]
    fn test_text_receipt_with_discount_and_deposit() {
        let text = render_receipt_text(&reservation(PassengerCategory::Student, deposit()));
        assert!(text.starts_with("Booking Confirmed!"));
        assert!(text.contains("Route:"));
        assert!(text.contains("Mantalongon to Carcar City"));
        assert!(text.contains("Seat Number(s):"));
        assert!(text.contains("A1, B1"));
        assert!(text.contains("Student discount (20%):"));
        assert!(text.contains("-PHP 40.00"));
        assert!(text.contains("PHP 160.00"));
        assert!(text.contains("30% Deposit"));
        assert!(text.contains("remaining balance of PHP 112.00"));
    }

    #[test]
    fn test_text_receipt_regular_full_payment() {
        let payment = Some(PaymentSummary {
            payment_type: PaymentType::Full,
            amount_paid: 200.0,
            balance: 0.0,
        });
        let text = render_receipt_text(&reservation(PassengerCategory::Regular, payment));
        assert!(!text.contains("discount"));
        assert!(!text.contains("Remaining Balance"));
        assert!(!text.contains("conductor"));
        assert!(text.contains("PHP 200.00"));
    }

    #[test]
    fn test_unpaid_receipt_title() {
        let text = render_receipt_text(&reservation(PassengerCategory::Regular, None));
        assert!(text.starts_with("Booking Pending Payment"));
    }

    #[test]
    fn test_html_receipt_escapes_values() {
        let html = render_receipt_html(&reservation(PassengerCategory::Senior, deposit()));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Juan &lt;dela&gt; Cruz"));
        assert!(!html.contains("<dela>"));
        assert!(html.contains("Senior discount (20%)"));
        assert!(html.contains("<tr class=\"total\">"));
    }

    #[test]
    fn test_export_html_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("receipt.html");
        export_receipt_html(&reservation(PassengerCategory::Pwd, deposit()), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("BQ-1A2B3C4D"));
    }
}
