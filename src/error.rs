use thiserror::Error;

/// Recoverable conditions raised by the monitor core
#[derive(Debug, Error, PartialEq)]
pub enum MonitorError {
    #[error("Invalid {field} threshold '{input}': expected an integer")]
    InvalidThreshold { field: &'static str, input: String },

    #[error("No readings recorded yet")]
    InsufficientData,

    #[error("Sensor unavailable: {0}")]
    SensorUnavailable(String),

    #[error("Measurement log is empty")]
    EmptyLog,
}
