/// Append-only record of every reading taken during a session
use crate::error::MonitorError;
use crate::models::Reading;

#[derive(Debug, Default)]
pub struct MeasurementLog {
    readings: Vec<Reading>,
}

impl MeasurementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn last(&self) -> Result<&Reading, MonitorError> {
        self.readings.last().ok_or(MonitorError::EmptyLog)
    }

    /// The `n` most recent readings in chronological order, or the whole log if it is shorter.
    pub fn window(&self, n: usize) -> &[Reading] {
        let start = self.readings.len().saturating_sub(n);
        &self.readings[start..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64) -> Reading {
        Reading::now(temperature, 50.0)
    }

    #[test]
    fn last_on_empty_log_fails() {
        let log = MeasurementLog::new();
        assert!(log.is_empty());
        assert_eq!(log.last(), Err(MonitorError::EmptyLog));
    }

    #[test]
    fn append_keeps_acquisition_order() {
        let mut log = MeasurementLog::new();
        for t in [3.0, 1.0, 2.0, 1.0] {
            log.append(reading(t));
        }

        let temps: Vec<f64> = log.iter().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![3.0, 1.0, 2.0, 1.0]);
        assert_eq!(log.len(), 4);
        assert_eq!(log.last().map(|r| r.temperature), Ok(1.0));
    }

    #[test]
    fn window_returns_most_recent_suffix() {
        let mut log = MeasurementLog::new();
        for t in 0..25 {
            log.append(reading(t as f64));
        }

        let temps: Vec<f64> = log.window(10).iter().map(|r| r.temperature).collect();
        assert_eq!(temps, (15..25).map(|t| t as f64).collect::<Vec<_>>());
    }

    #[test]
    fn window_larger_than_log_returns_everything() {
        let mut log = MeasurementLog::new();
        log.append(reading(1.0));
        log.append(reading(2.0));

        assert_eq!(log.window(10).len(), 2);
        assert!(MeasurementLog::new().window(10).is_empty());
    }
}
