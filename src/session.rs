use crate::alarms::AlarmThresholds;
use crate::measurements::MeasurementLog;

/// State of record for one run: every reading taken and the current alarm limits
#[derive(Debug)]
pub struct Session {
    pub log: MeasurementLog,
    pub thresholds: AlarmThresholds,
}

impl Session {
    pub fn new() -> Self {
        Session {
            log: MeasurementLog::new(),
            thresholds: AlarmThresholds::default(),
        }
    }
}
