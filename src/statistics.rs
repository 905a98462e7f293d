/// Summary statistics over the most recent readings
use crate::error::MonitorError;
use crate::measurements::MeasurementLog;
use crate::models::StatisticsSummary;
use crate::utils::round_display;

/// How many of the latest readings feed a summary
pub const STATISTICS_WINDOW: usize = 10;

/// Calculate mean, minimum and maximum over the latest readings
///
/// Uses up to `STATISTICS_WINDOW` of the most recent readings, or the whole
/// log when it is shorter. Values are accumulated in full precision and
/// only rounded for display at the end.
///
/// # Returns
/// The rounded summary, or `InsufficientData` when the log is empty
pub fn summarize(log: &MeasurementLog) -> Result<StatisticsSummary, MonitorError> {
    let window = log.window(STATISTICS_WINDOW);
    if window.is_empty() {
        return Err(MonitorError::InsufficientData);
    }

    let count = window.len() as f64;

    let temp_sum: f64 = window.iter().map(|r| r.temperature).sum();
    let humid_sum: f64 = window.iter().map(|r| r.humidity).sum();

    let temp_min = window.iter().map(|r| r.temperature).fold(f64::INFINITY, f64::min);
    let humid_min = window.iter().map(|r| r.humidity).fold(f64::INFINITY, f64::min);
    let temp_max = window
        .iter()
        .map(|r| r.temperature)
        .fold(f64::NEG_INFINITY, f64::max);
    let humid_max = window
        .iter()
        .map(|r| r.humidity)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(StatisticsSummary {
        mean_temperature: round_display(temp_sum / count),
        mean_humidity: round_display(humid_sum / count),
        min_temperature: round_display(temp_min),
        min_humidity: round_display(humid_min),
        max_temperature: round_display(temp_max),
        max_humidity: round_display(humid_max),
        samples: window.len(),
    })
}
