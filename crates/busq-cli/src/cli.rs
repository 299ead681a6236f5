//! CLI definition using clap

use std::path::PathBuf;

use busq_types::{BusType, Direction, OutputFormat, PassengerCategory, PaymentType};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM: {}", e))
}

#[derive(Parser)]
#[command(name = "busq")]
#[command(version)]
#[command(about = "Bus trips, live status and seat booking for the Mantalongon - Cebu City route")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Service date (YYYY-MM-DD), defaults to today
    #[arg(long, global = true, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Simulated time of day (HH:MM); watch mode then advances it per refresh
    #[arg(long, global = true, value_parser = parse_time)]
    pub at: Option<NaiveTime>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the trip board: every bus with its current status
    Trips {
        /// Only show this bus type (traditional, airconditioned)
        #[arg(long, short = 't')]
        bus_type: Option<BusType>,

        /// Only show buses whose current leg runs this way (to-cebu, to-mantalongon)
        #[arg(long, short = 'd')]
        direction: Option<Direction>,

        /// Refresh periodically
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// List every trip leg of the service date
    Schedule,

    /// Track one bus
    Track {
        /// Bus id (e.g., TRAD-001)
        bus_id: String,

        /// Refresh periodically
        #[arg(long, short = 'w')]
        watch: bool,
    },

    /// Show the seat map of a trip
    Seats {
        /// Trip leg id (e.g., TRAD-001-MtoC-202503140245)
        trip_id: String,
    },

    /// List drop-off stops and fares of a direction
    Stops {
        #[arg(default_value = "to-cebu")]
        direction: Direction,
    },

    /// Quote the fare of a trip
    Fare {
        trip_id: String,

        /// Drop-off stop, defaults to the final destination
        #[arg(long, short = 's')]
        stop: Option<String>,

        #[arg(long, short = 'c', default_value = "regular")]
        category: PassengerCategory,

        /// Number of seats
        #[arg(long, short = 'n', default_value_t = 1)]
        seats: u32,
    },

    /// Reserve seats; the reservation waits for payment
    Book {
        trip_id: String,

        /// Passenger name
        #[arg(long)]
        name: String,

        #[arg(long, short = 'c', default_value = "regular")]
        category: PassengerCategory,

        /// Drop-off stop, defaults to the final destination
        #[arg(long, short = 's')]
        stop: Option<String>,

        /// Seat ids (e.g., --seat A1 --seat B1 or --seat A1,B1)
        #[arg(long = "seat", required = true, value_delimiter = ',')]
        seats: Vec<String>,
    },

    /// Pay the pending reservation
    Pay {
        /// deposit (30%) or full
        payment_type: PaymentType,
    },

    /// Show the receipt of a confirmed reservation
    Receipt {
        /// Reservation id (e.g., BQ-1A2B3C4D)
        id: String,

        /// Also write an HTML receipt to this path
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set watch refresh interval in seconds
        #[arg(long)]
        set_refresh: Option<u64>,

        /// Set leg travel time in minutes
        #[arg(long)]
        set_travel_duration: Option<i64>,

        /// Set layover at Cebu City in minutes
        #[arg(long)]
        set_layover: Option<i64>,

        /// Enable/disable return legs
        #[arg(long)]
        set_round_trip: Option<bool>,

        /// Set reservation store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set fleet TOML override
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Set fare table TOML override
        #[arg(long)]
        set_fare_table_file: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_command() {
        let cli = Cli::try_parse_from([
            "busq",
            "--at",
            "01:30",
            "book",
            "TRAD-001-MtoC-202503140245",
            "--name",
            "Maria",
            "--category",
            "pwd",
            "--seat",
            "A1,B1",
            "--seat",
            "R2",
        ])
        .unwrap();
        assert_eq!(cli.at, NaiveTime::from_hms_opt(1, 30, 0));
        match cli.command {
            Commands::Book {
                seats, category, ..
            } => {
                assert_eq!(seats, vec!["A1", "B1", "R2"]);
                assert_eq!(category, PassengerCategory::Pwd);
            }
            _ => panic!("expected book"),
        }
    }

    #[test]
    fn test_parse_aliases() {
        let cli = Cli::try_parse_from(["busq", "trips", "-t", "ac", "-d", "ctom"]).unwrap();
        match cli.command {
            Commands::Trips {
                bus_type,
                direction,
                watch,
            } => {
                assert_eq!(bus_type, Some(BusType::Airconditioned));
                assert_eq!(direction, Some(Direction::CebuToMantalongon));
                assert!(!watch);
            }
            _ => panic!("expected trips"),
        }
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["busq", "--date", "14/03/2025", "schedule"]).is_err());
    }
}
