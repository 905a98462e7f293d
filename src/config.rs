use log::info;
use std::env;
use std::str::FromStr;

/// Settings for the simulated sensor
#[derive(Debug, Clone, PartialEq)]
pub struct SensorProfile {
    pub seed: Option<u64>,
    pub base_temperature: f64,
    pub base_humidity: f64,
    pub failure_rate: f64,
}

impl Default for SensorProfile {
    fn default() -> Self {
        SensorProfile {
            seed: None,
            base_temperature: 70.0,
            base_humidity: 55.0,
            failure_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub sensor: SensorProfile,
}

impl MonitorConfig {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment in `new`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SensorProfile::default();

        let seed = parse_var(&lookup, "SENSOR_SEED")?;
        let base_temperature =
            parse_var(&lookup, "SENSOR_BASE_TEMPERATURE")?.unwrap_or(defaults.base_temperature);
        let base_humidity =
            parse_var(&lookup, "SENSOR_BASE_HUMIDITY")?.unwrap_or(defaults.base_humidity);
        let failure_rate: f64 =
            parse_var(&lookup, "SENSOR_FAILURE_RATE")?.unwrap_or(defaults.failure_rate);

        for (key, value) in [
            ("SENSOR_BASE_TEMPERATURE", base_temperature),
            ("SENSOR_BASE_HUMIDITY", base_humidity),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number, got {}", key, value).into());
            }
        }

        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(format!(
                "SENSOR_FAILURE_RATE must be between 0 and 1, got {}",
                failure_rate
            )
            .into());
        }

        let sensor = SensorProfile {
            seed,
            base_temperature,
            base_humidity,
            failure_rate,
        };

        match sensor.seed {
            Some(seed) => info!("Simulated sensor seeded with {}", seed),
            None => info!("Simulated sensor using a random seed"),
        }
        info!(
            "Sensor base values: temperature={}, humidity={}, failure rate={}",
            sensor.base_temperature, sensor.base_humidity, sensor.failure_rate
        );

        Ok(MonitorConfig { sensor })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value for {}: '{}'", key, raw).into()),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<MonitorConfig, Box<dyn std::error::Error>> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MonitorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.sensor, SensorProfile::default());
    }

    #[test]
    fn reads_sensor_settings() {
        let config = config_from(&[
            ("SENSOR_SEED", "42"),
            ("SENSOR_BASE_TEMPERATURE", "78.5"),
            ("SENSOR_BASE_HUMIDITY", " 60 "),
            ("SENSOR_FAILURE_RATE", "0.25"),
        ])
        .unwrap();

        assert_eq!(config.sensor.seed, Some(42));
        assert_eq!(config.sensor.base_temperature, 78.5);
        assert_eq!(config.sensor.base_humidity, 60.0);
        assert_eq!(config.sensor.failure_rate, 0.25);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("SENSOR_SEED", "abc")]).is_err());
        assert!(config_from(&[("SENSOR_FAILURE_RATE", "1.5")]).is_err());
    }

    #[test]
    fn rejects_non_finite_base_values() {
        for raw in ["NaN", "inf", "-inf"] {
            assert!(config_from(&[("SENSOR_BASE_TEMPERATURE", raw)]).is_err());
            assert!(config_from(&[("SENSOR_BASE_HUMIDITY", raw)]).is_err());
        }
        assert!(config_from(&[("SENSOR_FAILURE_RATE", "NaN")]).is_err());
    }
}
