use log::debug;

use crate::error::MonitorError;
use crate::models::{AlarmResult, Reading};

pub const DEFAULT_TEMPERATURE_LIMIT: i64 = 80;
pub const DEFAULT_HUMIDITY_LIMIT: i64 = 75;

/// Upper limits that raise an alarm when a reading goes above them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmThresholds {
    pub temperature_limit: i64,
    pub humidity_limit: i64,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            temperature_limit: DEFAULT_TEMPERATURE_LIMIT,
            humidity_limit: DEFAULT_HUMIDITY_LIMIT,
        }
    }
}

impl AlarmThresholds {
    /// Replace both limits from user-entered text.
    ///
    /// Both values are parsed before anything is changed, so a rejected
    /// update leaves the previous limits in place.
    pub fn set(&mut self, temperature: &str, humidity: &str) -> Result<(), MonitorError> {
        let temperature_limit = parse_limit("temperature", temperature)?;
        let humidity_limit = parse_limit("humidity", humidity)?;

        self.temperature_limit = temperature_limit;
        self.humidity_limit = humidity_limit;
        debug!(
            "Thresholds updated: temperature={}, humidity={}",
            temperature_limit, humidity_limit
        );
        Ok(())
    }

    /// Equality with a limit does not alarm.
    pub fn evaluate(&self, reading: &Reading) -> AlarmResult {
        AlarmResult {
            temperature_exceeded: reading.temperature > self.temperature_limit as f64,
            humidity_exceeded: reading.humidity > self.humidity_limit as f64,
        }
    }
}

fn parse_limit(field: &'static str, input: &str) -> Result<i64, MonitorError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| MonitorError::InvalidThreshold {
            field,
            input: input.to_string(),
        })
}
