use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensorError {
    #[error("no response from sensor")]
    NoResponse,
}

/// Provider of raw (humidity, temperature) pairs
///
/// The sampling controller only sees this trait, so the simulated sensor can
/// be swapped for hardware or a scripted test double.
pub trait SensorSource {
    /// Produce the next `(humidity, temperature)` pair.
    fn generate_values(&mut self) -> Result<(f64, f64), SensorError>;
}
