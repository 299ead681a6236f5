//! Command handlers

use std::path::PathBuf;
use std::thread;
use std::time::Duration as StdDuration;

use busq_app::app::{track_bus, BoardFilter, BookingRequest, BookingService, TripBoard};
use busq_app::config::{Config, MAX_REFRESH_SECS};
use busq_app::export::{export_receipt_html, render_receipt_text};
use busq_app::network::TransitNetwork;
use busq_app::repository::{open_reservation_repo, FileReservationRepository};
use busq_domain::model::{DailySchedule, Reservation};
use busq_types::{BusType, Direction, OutputFormat, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::cli::{Cli, Commands};
use crate::output::{
    output_board, output_quote, output_reservation, output_schedule, output_seats, output_stops,
    output_tracking,
};

/// Current instant, real or simulated via `--date` / `--at`
#[derive(Debug, Clone, Copy)]
struct Clock {
    now: NaiveDateTime,
    simulated: bool,
}

impl Clock {
    fn from_cli(cli: &Cli) -> Self {
        let real = Local::now().naive_local();
        let simulated = cli.at.is_some() || cli.date.is_some();
        let date = cli.date.unwrap_or(real.date());
        let time = cli.at.unwrap_or(real.time());
        Self {
            now: date.and_time(time),
            simulated,
        }
    }

    fn service_date(&self) -> NaiveDate {
        self.now.date()
    }

    /// Move to the next refresh: simulated clocks step by the interval
    fn advance(&mut self, interval_secs: u64) {
        if self.simulated {
            self.now += Duration::seconds(interval_secs as i64);
        } else {
            self.now = Local::now().naive_local();
        }
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    if let Commands::Config {
        show,
        set_output,
        set_refresh,
        set_travel_duration,
        set_layover,
        set_round_trip,
        set_store_dir,
        set_fleet_file,
        set_fare_table_file,
        reset,
    } = &cli.command
    {
        return cmd_config(
            *show,
            ConfigUpdate {
                output_format: *set_output,
                refresh_interval_secs: *set_refresh,
                travel_duration_mins: *set_travel_duration,
                layover_mins: *set_layover,
                round_trip: *set_round_trip,
                store_dir: set_store_dir.clone(),
                fleet_file: set_fleet_file.clone(),
                fare_table_file: set_fare_table_file.clone(),
            },
            *reset,
        );
    }

    let network = TransitNetwork::from_config(&config)?;
    let clock = Clock::from_cli(&cli);
    tracing::debug!(now = %clock.now, simulated = clock.simulated, "clock");

    match &cli.command {
        Commands::Trips {
            bus_type,
            direction,
            watch,
        } => cmd_trips(
            &config,
            &network,
            clock,
            *bus_type,
            *direction,
            *watch,
            output_format,
        ),

        Commands::Schedule => {
            let schedule = network.schedule(clock.service_date());
            output_schedule(output_format, &schedule, clock.now)
        }

        Commands::Track { bus_id, watch } => {
            cmd_track(&config, &network, clock, bus_id, *watch, output_format)
        }

        Commands::Seats { trip_id } => {
            let service = booking_service(&config, &network, &cli, trip_id)?;
            let layout = service.seat_layout(trip_id)?;
            output_seats(output_format, trip_id, &layout)
        }

        Commands::Stops { direction } => {
            output_stops(output_format, *direction, network.fares.stops(*direction))
        }

        Commands::Fare {
            trip_id,
            stop,
            category,
            seats,
        } => {
            let service = booking_service(&config, &network, &cli, trip_id)?;
            let quote = service.quote(trip_id, stop.as_deref(), *category, *seats)?;
            output_quote(output_format, trip_id, &quote)
        }

        Commands::Book {
            trip_id,
            name,
            category,
            stop,
            seats,
        } => {
            let service = booking_service(&config, &network, &cli, trip_id)?;
            let request = BookingRequest {
                trip_id: trip_id.clone(),
                passenger_name: name.clone(),
                category: *category,
                drop_off: stop.clone(),
                seats: seats.clone(),
            };
            let reservation = service.start_booking(&request, clock.now)?;
            output_reservation(output_format, &reservation)
        }

        Commands::Pay { payment_type } => {
            let service = BookingService::new(
                open_reservation_repo(&config)?,
                network.schedule(clock.service_date()),
                network.fares.clone(),
            );
            let reservation = service.pay(*payment_type)?;
            output_reservation(output_format, &reservation)
        }

        Commands::Receipt { id, html } => {
            let service = BookingService::new(
                open_reservation_repo(&config)?,
                network.schedule(clock.service_date()),
                network.fares.clone(),
            );
            let reservation = service.receipt(id)?;
            cmd_receipt(&reservation, html.clone(), output_format)
        }

        Commands::Config { .. } => Ok(()),
    }
}

/// Schedule that contains `trip_id`.
///
/// Without `--date`, the date is read from the trip id; a return leg that
/// departs after midnight belongs to the previous service date.
fn schedule_for_trip(network: &TransitNetwork, cli: &Cli, trip_id: &str) -> DailySchedule {
    if let Some(date) = cli.date {
        return network.schedule(date);
    }

    let fallback = Local::now().date_naive();
    let Some(date) = trip_date_from_id(trip_id) else {
        return network.schedule(fallback);
    };

    let schedule = network.schedule(date);
    if schedule.find_leg(trip_id.trim()).is_some() {
        return schedule;
    }
    match date.pred_opt() {
        Some(previous) => {
            let earlier = network.schedule(previous);
            if earlier.find_leg(trip_id.trim()).is_some() {
                earlier
            } else {
                schedule
            }
        }
        None => schedule,
    }
}

/// Date part of a `{bus}-{dir}-{yyyyMMddHHmm}` trip id
fn trip_date_from_id(trip_id: &str) -> Option<NaiveDate> {
    let stamp = trip_id.trim().rsplit('-').next()?;
    NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M")
        .ok()
        .map(|dt| dt.date())
}

fn booking_service(
    config: &Config,
    network: &TransitNetwork,
    cli: &Cli,
    trip_id: &str,
) -> Result<BookingService<FileReservationRepository>> {
    Ok(BookingService::new(
        open_reservation_repo(config)?,
        schedule_for_trip(network, cli, trip_id),
        network.fares.clone(),
    ))
}

fn cmd_trips(
    config: &Config,
    network: &TransitNetwork,
    mut clock: Clock,
    bus_type: Option<BusType>,
    direction: Option<Direction>,
    watch: bool,
    output_format: OutputFormat,
) -> Result<()> {
    let filter = BoardFilter {
        bus_type,
        direction,
    };

    loop {
        let schedule = network.schedule(clock.service_date());
        let board = TripBoard::build(&schedule, clock.now, &filter);
        output_board(output_format, &board)?;

        if !watch {
            return Ok(());
        }
        wait_for_refresh(config, &mut clock);
    }
}

fn cmd_track(
    config: &Config,
    network: &TransitNetwork,
    mut clock: Clock,
    bus_id: &str,
    watch: bool,
    output_format: OutputFormat,
) -> Result<()> {
    loop {
        let schedule = network.schedule(clock.service_date());
        let entry = track_bus(&schedule, bus_id, clock.now)?;
        output_tracking(output_format, &entry)?;

        if !watch {
            return Ok(());
        }
        wait_for_refresh(config, &mut clock);
    }
}

fn refresh_interval(config: &Config) -> u64 {
    config.refresh_interval_secs.clamp(1, MAX_REFRESH_SECS)
}

fn wait_for_refresh(config: &Config, clock: &mut Clock) {
    let interval = refresh_interval(config);
    thread::sleep(StdDuration::from_secs(interval));
    clock.advance(interval);
}

fn cmd_receipt(
    reservation: &Reservation,
    html: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        output_reservation(output_format, reservation)?;
    } else {
        print!("\n{}", render_receipt_text(reservation));
    }

    if let Some(path) = html {
        export_receipt_html(reservation, &path)?;
        if output_format != OutputFormat::Json {
            println!("\nHTML receipt written to {}", path.display());
        }
    }
    Ok(())
}

/// Config fields to overwrite
#[derive(Debug, Default)]
struct ConfigUpdate {
    output_format: Option<OutputFormat>,
    refresh_interval_secs: Option<u64>,
    travel_duration_mins: Option<i64>,
    layover_mins: Option<i64>,
    round_trip: Option<bool>,
    store_dir: Option<PathBuf>,
    fleet_file: Option<PathBuf>,
    fare_table_file: Option<PathBuf>,
}

impl ConfigUpdate {
    /// Apply to `config`, returning whether anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(output_format) = self.output_format {
            config.output_format = output_format;
            modified = true;
        }
        if let Some(secs) = self.refresh_interval_secs {
            config.refresh_interval_secs = secs;
            modified = true;
        }
        if let Some(mins) = self.travel_duration_mins {
            config.travel_duration_mins = mins;
            modified = true;
        }
        if let Some(mins) = self.layover_mins {
            config.layover_mins = mins;
            modified = true;
        }
        if let Some(round_trip) = self.round_trip {
            config.round_trip = round_trip;
            modified = true;
        }
        if let Some(dir) = self.store_dir {
            config.store_dir = Some(dir);
            modified = true;
        }
        if let Some(path) = self.fleet_file {
            config.fleet_file = Some(path);
            modified = true;
        }
        if let Some(path) = self.fare_table_file {
            config.fare_table_file = Some(path);
            modified = true;
        }

        modified
    }
}

fn cmd_config(show: bool, update: ConfigUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = update.apply(&mut config);

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
