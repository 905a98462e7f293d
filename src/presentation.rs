/// Front-end notifications and the console table renderer
use crate::alarms::AlarmThresholds;
use crate::models::{AlarmKind, Reading, StatisticsSummary};
use crate::utils::{format_datetime, format_value, round_display};

/// Notifications the monitor core sends to whatever front end drives it
pub trait Presentation {
    fn on_row_appended(&mut self, reading: &Reading);
    fn on_alarm(&mut self, kind: AlarmKind);
    fn on_summary_ready(&mut self, summary: &StatisticsSummary);
    fn on_thresholds_set(&mut self, thresholds: &AlarmThresholds);
}

/// One displayed table row: label, temperature, humidity
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl TableRow {
    fn from_reading(reading: &Reading) -> Self {
        TableRow {
            label: format_datetime(&reading.timestamp),
            temperature: round_display(reading.temperature),
            humidity: round_display(reading.humidity),
        }
    }

    fn render(&self) -> String {
        format!(
            "{:<20} {:>12} {:>12}",
            self.label,
            format_value(self.temperature),
            format_value(self.humidity)
        )
    }
}

/// Prints the reading table and alerts to standard output
///
/// Keeps the rows currently on screen. A statistics request replaces them
/// with the three summary rows; the measurement log itself is unaffected.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    rows: Vec<TableRow>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn render_table(&self) -> String {
        let mut out = format!("{:<20} {:>12} {:>12}\n", "Time", "Temperature", "Humidity");
        for row in &self.rows {
            out.push_str(&row.render());
            out.push('\n');
        }
        out
    }

    pub fn show_table(&self) {
        print!("{}", self.render_table());
    }
}

impl Presentation for ConsolePresenter {
    fn on_row_appended(&mut self, reading: &Reading) {
        let row = TableRow::from_reading(reading);
        println!("{}", row.render());
        self.rows.push(row);
    }

    fn on_alarm(&mut self, kind: AlarmKind) {
        println!("Limit Exceeded: {}", kind.message());
    }

    fn on_summary_ready(&mut self, summary: &StatisticsSummary) {
        self.rows.clear();
        self.rows.push(TableRow {
            label: "Mean".to_string(),
            temperature: summary.mean_temperature,
            humidity: summary.mean_humidity,
        });
        self.rows.push(TableRow {
            label: "Minimum".to_string(),
            temperature: summary.min_temperature,
            humidity: summary.min_humidity,
        });
        self.rows.push(TableRow {
            label: "Maximum".to_string(),
            temperature: summary.max_temperature,
            humidity: summary.max_humidity,
        });
        self.show_table();
    }

    fn on_thresholds_set(&mut self, thresholds: &AlarmThresholds) {
        println!(
            "Alarms Set: Temperature Alarm set to {} and Humidity Alarm set to {}.",
            thresholds.temperature_limit, thresholds.humidity_limit
        );
    }
}
