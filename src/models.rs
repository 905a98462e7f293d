use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: OffsetDateTime,
    pub temperature: f64,
    pub humidity: f64,
}

impl Reading {
    /// Build a reading stamped with the current local time, truncated to whole seconds.
    ///
    /// Falls back to UTC when the local offset cannot be determined
    /// (e.g. in multi-threaded processes on some platforms).
    pub fn now(temperature: f64, humidity: f64) -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let timestamp = now.replace_nanosecond(0).unwrap_or(now);

        Reading {
            timestamp,
            temperature,
            humidity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmKind {
    Temperature,
    Humidity,
}

impl AlarmKind {
    pub fn message(&self) -> &'static str {
        match self {
            AlarmKind::Temperature => "Temperature limit exceeded.",
            AlarmKind::Humidity => "Humidity limit exceeded.",
        }
    }
}

/// Outcome of checking one reading against the current thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlarmResult {
    pub temperature_exceeded: bool,
    pub humidity_exceeded: bool,
}

impl AlarmResult {
    pub fn is_clear(&self) -> bool {
        !self.temperature_exceeded && !self.humidity_exceeded
    }

    /// Raised alarms, temperature first
    pub fn kinds(&self) -> Vec<AlarmKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.temperature_exceeded {
            kinds.push(AlarmKind::Temperature);
        }
        if self.humidity_exceeded {
            kinds.push(AlarmKind::Humidity);
        }
        kinds
    }
}

/// A reading that was appended to the log, with the alarms it raised
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acquisition {
    pub reading: Reading,
    pub alarms: AlarmResult,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub mean_temperature: f64,
    pub mean_humidity: f64,
    pub min_temperature: f64,
    pub min_humidity: f64,
    pub max_temperature: f64,
    pub max_humidity: f64,
    pub samples: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::UtcOffset;

    #[test]
    fn timestamps_have_whole_second_precision() {
        for _ in 0..5 {
            let reading = Reading::now(70.0, 50.0);
            assert_eq!(reading.timestamp.nanosecond(), 0);
        }
    }

    #[test]
    fn timestamps_use_local_offset_when_known() {
        let before = UtcOffset::current_local_offset().ok();
        let reading = Reading::now(70.0, 50.0);
        let after = UtcOffset::current_local_offset().ok();

        // Only meaningful when the lookup gave the same answer on both sides
        if before == after {
            let expected = before.unwrap_or(UtcOffset::UTC);
            assert_eq!(reading.timestamp.offset(), expected);
        }
    }

    #[test]
    fn alarm_kinds_list_temperature_first() {
        let both = AlarmResult {
            temperature_exceeded: true,
            humidity_exceeded: true,
        };
        assert_eq!(both.kinds(), vec![AlarmKind::Temperature, AlarmKind::Humidity]);
        assert!(AlarmResult::default().is_clear());
        assert!(AlarmResult::default().kinds().is_empty());
    }
}
