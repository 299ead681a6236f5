//! Fleet, fares and schedule settings resolved from config

use chrono::NaiveDate;

use busq_domain::model::{DailySchedule, FareTable, PhysicalBusSchedule};
use busq_domain::service::{generate_schedule, ScheduleSettings};
use busq_infra::{FareTableLoader, FleetLoader};
use busq_types::Result;

use crate::config::Config;
use crate::constants::{FARE_TABLE, FLEET};

/// Everything needed to build a day's schedule and price its trips
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    pub fleet: Vec<PhysicalBusSchedule>,
    pub fares: FareTable,
    pub settings: ScheduleSettings,
}

impl TransitNetwork {
    /// Built-in fleet and fares with default timings
    pub fn builtin() -> Self {
        Self {
            fleet: FLEET.clone(),
            fares: FARE_TABLE.clone(),
            settings: ScheduleSettings::default(),
        }
    }

    /// Apply the config's TOML overrides and timing settings
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let fleet = match config.fleet_file {
            Some(ref path) => {
                tracing::info!(path = %path.display(), "loading fleet override");
                FleetLoader::load_from_file(path)?.into_buses()
            }
            None => FLEET.clone(),
        };

        let fares = match config.fare_table_file {
            Some(ref path) => {
                tracing::info!(path = %path.display(), "loading fare table override");
                FareTableLoader::load_from_file(path)?
            }
            None => FARE_TABLE.clone(),
        };

        Ok(Self {
            fleet,
            fares,
            settings: config.schedule_settings(),
        })
    }

    pub fn schedule(&self, service_date: NaiveDate) -> DailySchedule {
        generate_schedule(&self.fleet, service_date, &self.settings)
    }

    pub fn bus(&self, bus_id: &str) -> Option<&PhysicalBusSchedule> {
        self.fleet
            .iter()
            .find(|bus| bus.bus_id.eq_ignore_ascii_case(bus_id.trim()))
    }
}
