//! Fleet definition loader from TOML configuration

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use busq_domain::model::PhysicalBusSchedule;
use busq_types::{ConfigError, Error, Result};
use serde::Deserialize;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetConfig {
    #[serde(default)]
    buses: Vec<PhysicalBusSchedule>,
}

/// Physical buses loaded from a `[[buses]]` TOML file
#[derive(Debug)]
pub struct FleetLoader {
    buses: Vec<PhysicalBusSchedule>,
}

impl FleetLoader {
    /// Load the fleet from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load the fleet from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: FleetConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet TOML: {}",
                e
            )))
        })?;

        let mut seen = HashSet::new();
        for bus in &config.buses {
            if bus.bus_id.trim().is_empty() {
                return Err(ConfigError::ParseError("Fleet entry with empty bus_id".into()).into());
            }
            if !seen.insert(bus.bus_id.trim().to_ascii_uppercase()) {
                return Err(ConfigError::ParseError(format!(
                    "Duplicate bus_id in fleet: {}",
                    bus.bus_id
                ))
                .into());
            }
        }

        tracing::debug!(buses = config.buses.len(), "loaded fleet");
        Ok(Self {
            buses: config.buses,
        })
    }

    pub fn buses(&self) -> &[PhysicalBusSchedule] {
        &self.buses
    }

    pub fn into_buses(self) -> Vec<PhysicalBusSchedule> {
        self.buses
    }

    pub fn count(&self) -> usize {
        self.buses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busq_types::BusType;
    use chrono::NaiveTime;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[buses]]
bus_id = "TRAD-001"
bus_type = "Traditional"
departure = "02:45"
plate = "BUS-MTC-0245"

[[buses]]
bus_id = "AC-001"
bus_type = "Airconditioned"
departure = "08:00"
plate = "BUS-MTC-0800-AC"
"#;

    #[test]
    fn test_load_from_str() {
        let loader = FleetLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 2);
        let ac = &loader.buses()[1];
        assert_eq!(ac.bus_type, BusType::Airconditioned);
        assert_eq!(ac.departure, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn test_duplicate_bus_id_rejected_ignoring_case() {
        let toml = format!(
            "{}\n[[buses]]\nbus_id = \"trad-001\"\nbus_type = \"Traditional\"\ndeparture = \"03:00\"\nplate = \"X\"\n",
            TEST_TOML
        );
        let err = FleetLoader::load_from_str(&toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate bus_id"));
    }

    #[test]
    fn test_duplicate_bus_id_rejected() {
        let toml = format!(
            "{}\n[[buses]]\nbus_id = \"TRAD-001\"\nbus_type = \"Traditional\"\ndeparture = \"03:00\"\nplate = \"X\"\n",
            TEST_TOML
        );
        let err = FleetLoader::load_from_str(&toml).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_bad_time_rejected() {
        let toml = r#"
[[buses]]
bus_id = "TRAD-009"
bus_type = "Traditional"
departure = "25:61"
plate = "X"
"#;
        assert!(FleetLoader::load_from_str(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();
        let loader = FleetLoader::load_from_file(file.path()).unwrap();
        assert_eq!(loader.into_buses()[0].bus_id, "TRAD-001");
    }

    #[test]
    fn test_missing_file() {
        let err = FleetLoader::load_from_file(Path::new("/nonexistent/fleet.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fleet file"));
    }
}
