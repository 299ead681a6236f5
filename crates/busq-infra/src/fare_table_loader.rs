//! Fare table loader from TOML configuration

use std::fs;
use std::path::Path;

use busq_domain::model::FareTable;
use busq_types::{ConfigError, Error, Result};

/// Loads a `[[routes]]` / `[[routes.stops]]` fare table
#[derive(Debug)]
pub struct FareTableLoader;

impl FareTableLoader {
    pub fn load_from_file(path: &Path) -> Result<FareTable> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fare table file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    pub fn load_from_str(toml_content: &str) -> Result<FareTable> {
        let table: FareTable = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fare table TOML: {}",
                e
            )))
        })?;

        for route in &table.routes {
            if let Some(stop) = route.stops.iter().find(|stop| {
                stop.traditional.is_some_and(invalid_fare)
                    || stop.airconditioned.is_some_and(invalid_fare)
            }) {
                return Err(ConfigError::ParseError(format!(
                    "Negative or non-finite fare for stop '{}' ({})",
                    stop.name, route.direction
                ))
                .into());
            }
        }

        tracing::debug!(routes = table.routes.len(), "loaded fare table");
        Ok(table)
    }
}

fn invalid_fare(fare: f64) -> bool {
    !fare.is_finite() || fare < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use busq_types::{BusType, Direction};

    const TEST_TOML: &str = r#"
[[routes]]
direction = "Mantalongon_to_Cebu"

[[routes.stops]]
name = "Dalaguete"
traditional = 40.0
airconditioned = 50.0

[[routes.stops]]
name = "Cebu City"

[[routes]]
direction = "Cebu_to_Mantalongon"

[[routes.stops]]
name = "Talisay City"
traditional = 25.0
airconditioned = 30.0
"#;

    #[test]
    fn test_load_from_str() {
        let table = FareTableLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(table.routes.len(), 2);
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "Dalaguete", BusType::Airconditioned),
            Some(50.0)
        );
        assert_eq!(
            table.lookup(Direction::CebuToMantalongon, "Talisay City", BusType::Traditional),
            Some(25.0)
        );
        assert!(table
            .find_stop(Direction::MantalongonToCebu, "Cebu City")
            .is_some());
        assert_eq!(
            table.lookup(Direction::MantalongonToCebu, "Cebu City", BusType::Traditional),
            None
        );
    }

    #[test]
    fn test_negative_fare_rejected() {
        let toml = r#"
[[routes]]
direction = "Mantalongon_to_Cebu"

[[routes.stops]]
name = "Argao"
traditional = -1.0
"#;
        let err = FareTableLoader::load_from_str(toml).unwrap_err();
        assert!(err.to_string().contains("Negative or non-finite fare"));
    }

    #[test]
    fn test_non_finite_fare_rejected() {
        for value in ["nan", "inf", "-inf"] {
            let toml = format!(
                "[[routes]]\ndirection = \"Mantalongon_to_Cebu\"\n\n[[routes.stops]]\nname = \"Argao\"\nairconditioned = {}\n",
                value
            );
            let err = FareTableLoader::load_from_str(&toml).unwrap_err();
            assert!(err.to_string().contains("non-finite"), "{}", value);
        }
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let toml = r#"
[[routes]]
direction = "Cebu_to_Manila"
"#;
        assert!(matches!(
            FareTableLoader::load_from_str(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
