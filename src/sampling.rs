/// Acquisition commands: single and batch sampling, statistics and alarm limits
use log::{debug, error, info, warn};
use tokio::time::{sleep, Duration};

use crate::alarms::AlarmThresholds;
use crate::error::MonitorError;
use crate::models::{Acquisition, Reading, StatisticsSummary};
use crate::presentation::Presentation;
use crate::sensor::SensorSource;
use crate::session::Session;
use crate::statistics::summarize;

pub const BATCH_SIZE: usize = 10;
pub const BATCH_INTERVAL: Duration = Duration::from_secs(1);

/// Drives the sensor and owns the session state
///
/// Every command runs to completion before the next one is accepted, so the
/// log and thresholds need no locking.
pub struct SamplingController<S, P> {
    sensor: S,
    presenter: P,
    session: Session,
    batch_interval: Duration,
}

impl<S: SensorSource, P: Presentation> SamplingController<S, P> {
    pub fn new(sensor: S, presenter: P) -> Self {
        Self::with_interval(sensor, presenter, BATCH_INTERVAL)
    }

    /// Controller with a custom pause between batch samples
    pub fn with_interval(sensor: S, presenter: P, batch_interval: Duration) -> Self {
        SamplingController {
            sensor,
            presenter,
            session: Session::new(),
            batch_interval,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Take one reading, log it, and report it along with any alarms it raises.
    ///
    /// A sensor failure leaves the log unchanged.
    pub fn acquire_one(&mut self) -> Result<Acquisition, MonitorError> {
        let (humidity, temperature) = self.sensor.generate_values().map_err(|e| {
            error!("Sensor read failed: {}", e);
            MonitorError::SensorUnavailable(e.to_string())
        })?;

        let reading = Reading::now(temperature, humidity);
        self.session.log.append(reading);
        debug!(
            "Reading #{}: temperature={:.4}, humidity={:.4}",
            self.session.log.len(),
            reading.temperature,
            reading.humidity
        );

        self.presenter.on_row_appended(&reading);

        let alarms = self.session.thresholds.evaluate(&reading);
        for kind in alarms.kinds() {
            warn!(
                "{} (temperature={:.4}, humidity={:.4})",
                kind.message(),
                reading.temperature,
                reading.humidity
            );
            self.presenter.on_alarm(kind);
        }

        Ok(Acquisition { reading, alarms })
    }

    /// Take `BATCH_SIZE` readings, pausing the batch interval between consecutive ones.
    ///
    /// Stops at the first sensor failure; readings taken before it stay in the log.
    pub async fn acquire_ten(&mut self) -> Result<Vec<Acquisition>, MonitorError> {
        info!(
            "Starting batch of {} readings, {:?} apart",
            BATCH_SIZE, self.batch_interval
        );
        let mut acquisitions = Vec::with_capacity(BATCH_SIZE);

        for i in 0..BATCH_SIZE {
            if i > 0 {
                sleep(self.batch_interval).await;
            }

            match self.acquire_one() {
                Ok(acquisition) => acquisitions.push(acquisition),
                Err(e) => {
                    warn!(
                        "Batch stopped after {} of {} readings",
                        acquisitions.len(),
                        BATCH_SIZE
                    );
                    return Err(e);
                }
            }
        }

        info!("Batch complete, log holds {} readings", self.session.log.len());
        Ok(acquisitions)
    }

    /// Summarize the latest readings and hand the result to the front end.
    pub fn summarize(&mut self) -> Result<StatisticsSummary, MonitorError> {
        let summary = summarize(&self.session.log)?;
        info!(
            "Statistics over {} readings: mean temperature {}, mean humidity {}",
            summary.samples, summary.mean_temperature, summary.mean_humidity
        );
        self.presenter.on_summary_ready(&summary);
        Ok(summary)
    }

    /// Replace both alarm limits from user text; rejected input keeps the old limits.
    pub fn set_thresholds(
        &mut self,
        temperature: &str,
        humidity: &str,
    ) -> Result<AlarmThresholds, MonitorError> {
        self.session.thresholds.set(temperature, humidity)?;

        let thresholds = self.session.thresholds;
        info!(
            "Alarms set: temperature={}, humidity={}",
            thresholds.temperature_limit, thresholds.humidity_limit
        );
        self.presenter.on_thresholds_set(&thresholds);
        Ok(thresholds)
    }
}
