//! Configuration management for busq
//!
//! Config stored at: ~/.config/busq/config.json

use std::path::{Path, PathBuf};

use busq_domain::service::ScheduleSettings;
use busq_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "busq";

/// Upper bound for leg travel time and layover, one day
const MAX_LEG_MINUTES: i64 = 24 * 60;

/// Upper bound for the watch refresh interval, one day
pub const MAX_REFRESH_SECS: u64 = 24 * 60 * 60;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the reservation store (storage.json)
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Seconds between status refreshes in watch mode
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Travel time of one leg in minutes
    #[serde(default = "default_travel_duration")]
    pub travel_duration_mins: i64,

    /// Minutes parked at Cebu City before the return leg
    #[serde(default = "default_layover")]
    pub layover_mins: i64,

    /// Generate return legs
    #[serde(default = "default_true")]
    pub round_trip: bool,

    /// TOML file replacing the built-in fleet
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// TOML file replacing the built-in fare table
    #[serde(default)]
    pub fare_table_file: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_refresh_interval() -> u64 {
    30
}

fn default_travel_duration() -> i64 {
    240
}

fn default_layover() -> i64 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            output_format: default_output_format(),
            refresh_interval_secs: default_refresh_interval(),
            travel_duration_mins: default_travel_duration(),
            layover_mins: default_layover(),
            round_trip: true,
            fleet_file: None,
            fare_table_file: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the reservation store directory
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join(APP_DIR);
        Ok(data_dir)
    }

    pub fn schedule_settings(&self) -> ScheduleSettings {
        ScheduleSettings {
            travel_duration_mins: self.travel_duration_mins,
            layover_mins: self.layover_mins,
            round_trip: self.round_trip,
        }
    }

    /// Check values the schedule and watch loop depend on
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LEG_MINUTES).contains(&self.travel_duration_mins) {
            return Err(ConfigError::ParseError(format!(
                "travel_duration_mins must be between 1 and {}, got {}",
                MAX_LEG_MINUTES, self.travel_duration_mins
            ))
            .into());
        }
        if !(0..=MAX_LEG_MINUTES).contains(&self.layover_mins) {
            return Err(ConfigError::ParseError(format!(
                "layover_mins must be between 0 and {}, got {}",
                MAX_LEG_MINUTES, self.layover_mins
            ))
            .into());
        }
        if !(1..=MAX_REFRESH_SECS).contains(&self.refresh_interval_secs) {
            return Err(ConfigError::ParseError(format!(
                "refresh_interval_secs must be between 1 and {}, got {}",
                MAX_REFRESH_SECS, self.refresh_interval_secs
            ))
            .into());
        }
        Ok(())
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in)".to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Busq Configuration")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:        {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Refresh interval: {}s", self.refresh_interval_secs)?;
        writeln!(f, "Travel duration:  {} min", self.travel_duration_mins)?;
        writeln!(f, "Layover:          {} min", self.layover_mins)?;
        writeln!(f, "Round trip:       {}", self.round_trip)?;
        writeln!(f, "Fleet file:       {}", display_path(&self.fleet_file))?;
        writeln!(f, "Fare table file:  {}", display_path(&self.fare_table_file))?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
