/// Simulated temperature and humidity sensor
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SensorProfile;
use crate::sensor::source::{SensorError, SensorSource};

// Physical range of the simulated probe
const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
const TEMPERATURE_RANGE: (f64, f64) = (-20.0, 100.0);

// Largest change between two consecutive readings
const HUMIDITY_STEP: f64 = 2.5;
const TEMPERATURE_STEP: f64 = 1.5;

/// Random-walk sensor that drifts around a base humidity and temperature
///
/// Each call moves the previous value by a bounded random step and clamps
/// the result to the probe's range. A non-zero failure rate makes a share of
/// calls fail, which is how sensor outages are exercised without hardware.
pub struct PseudoSensor {
    rng: StdRng,
    humidity: f64,
    temperature: f64,
    failure_rate: f64,
}

impl PseudoSensor {
    pub fn new(profile: &SensorProfile) -> Self {
        let rng = match profile.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            humidity: clamp(profile.base_humidity, HUMIDITY_RANGE),
            temperature: clamp(profile.base_temperature, TEMPERATURE_RANGE),
            failure_rate: profile.failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl SensorSource for PseudoSensor {
    fn generate_values(&mut self) -> Result<(f64, f64), SensorError> {
        if self.failure_rate > 0.0 && self.rng.gen_bool(self.failure_rate) {
            return Err(SensorError::NoResponse);
        }

        let dh = self.rng.gen_range(-HUMIDITY_STEP..=HUMIDITY_STEP);
        let dt = self.rng.gen_range(-TEMPERATURE_STEP..=TEMPERATURE_STEP);
        self.humidity = clamp(self.humidity + dh, HUMIDITY_RANGE);
        self.temperature = clamp(self.temperature + dt, TEMPERATURE_RANGE);

        debug!(
            "Simulated values: humidity={:.4}, temperature={:.4}",
            self.humidity, self.temperature
        );
        Ok((self.humidity, self.temperature))
    }
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}
