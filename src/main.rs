mod alarms;
mod config;
mod error;
mod measurements;
mod models;
mod presentation;
mod sampling;
mod sensor;
mod session;
mod statistics;
mod utils;

use log::{error, info, warn};
use std::io::BufRead;
use tokio::sync::mpsc;

use config::MonitorConfig;
use error::MonitorError;
use models::Acquisition;
use presentation::ConsolePresenter;
use sampling::SamplingController;
use sensor::PseudoSensor;
use utils::{format_datetime, format_value};

type Controller = SamplingController<PseudoSensor, ConsolePresenter>;

const HELP: &str = "\
Commands:
  current                    read the sensor once
  next10                     read the sensor 10 times, one second apart
  stats                      show mean/minimum/maximum of the last 10 readings
  alarms <temp> <humidity>   set the alarm limits (integers)
  last                       show the most recent reading
  history                    list every reading taken this session
  show                       redraw the table
  help                       show this message
  quit                       exit";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Current,
    NextTen,
    Stats,
    Alarms(&'a str, &'a str),
    Last,
    History,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command<'_>, String> {
    let mut parts = line.split_whitespace();
    let name = match parts.next() {
        Some(name) => name,
        None => return Err(String::new()),
    };

    let command = match name.to_lowercase().as_str() {
        "current" => Command::Current,
        "next10" => Command::NextTen,
        "stats" => Command::Stats,
        "alarms" => match (parts.next(), parts.next()) {
            (Some(temperature), Some(humidity)) => Command::Alarms(temperature, humidity),
            _ => return Err("Usage: alarms <temp> <humidity>".to_string()),
        },
        "last" => Command::Last,
        "history" => Command::History,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };

    if parts.next().is_some() {
        return Err(format!("Too many arguments for '{}'", name));
    }
    Ok(command)
}

/// Report a recoverable core error to the user
fn report(e: &MonitorError) {
    match e {
        MonitorError::InvalidThreshold { .. } => {
            warn!("Alarm update rejected: {}", e);
            println!("Invalid alarm value: {}", e);
        }
        MonitorError::InsufficientData | MonitorError::EmptyLog => {
            info!("{}", e);
            println!("No readings yet. Use 'current' or 'next10' first.");
        }
        MonitorError::SensorUnavailable(_) => {
            println!("{}. Try again.", e);
        }
    }
}

/// One-line outcome of a batch: readings taken, time span, and how many raised alarms
fn batch_report(acquisitions: &[Acquisition]) -> String {
    let alarmed = acquisitions
        .iter()
        .filter(|a| !a.alarms.is_clear())
        .count();

    match (acquisitions.first(), acquisitions.last()) {
        (Some(first), Some(last)) => format!(
            "{} readings from {} to {}, {} over an alarm limit",
            acquisitions.len(),
            format_datetime(&first.reading.timestamp),
            format_datetime(&last.reading.timestamp),
            alarmed
        ),
        _ => "No readings taken".to_string(),
    }
}

/// Run one command; returns false when the user asked to exit
async fn dispatch(controller: &mut Controller, command: Command<'_>) -> bool {
    let result = match command {
        Command::Current => controller.acquire_one().map(|_| ()),
        Command::NextTen => controller
            .acquire_ten()
            .await
            .map(|acquisitions| println!("{}", batch_report(&acquisitions))),
        Command::Stats => controller.summarize().map(|_| ()),
        Command::Alarms(temperature, humidity) => controller
            .set_thresholds(temperature, humidity)
            .map(|_| ()),
        Command::Last => controller.session().log.last().map(|reading| {
            println!(
                "{}  temperature {}  humidity {}",
                format_datetime(&reading.timestamp),
                format_value(reading.temperature),
                format_value(reading.humidity)
            );
        }),
        Command::History => {
            let log = &controller.session().log;
            if log.is_empty() {
                Err(MonitorError::EmptyLog)
            } else {
                for (i, reading) in log.iter().enumerate() {
                    println!(
                        "{:>4}  {}  {:>10}  {:>10}",
                        i + 1,
                        format_datetime(&reading.timestamp),
                        format_value(reading.temperature),
                        format_value(reading.humidity)
                    );
                }
                Ok(())
            }
        }
        Command::Show => {
            controller.presenter().show_table();
            Ok(())
        }
        Command::Help => {
            println!("{}", HELP);
            Ok(())
        }
        Command::Quit => return false,
    };

    if let Err(e) = result {
        report(&e);
    }
    true
}

/// Forward stdin lines into a channel from a plain OS thread.
///
/// A blocked read on this thread never holds up runtime shutdown; the
/// process exits from `main` even while it waits for input.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to read standard input: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Execute commands until `quit` or until the input channel closes
async fn command_loop(controller: &mut Controller, mut lines: mpsc::Receiver<String>) {
    while let Some(line) = lines.recv().await {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                if !msg.is_empty() {
                    println!("{}", msg);
                }
                continue;
            }
        };

        if !dispatch(controller, command).await {
            break;
        }
    }

    info!(
        "Session ended with {} readings",
        controller.session().log.len()
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match MonitorConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    let sensor = PseudoSensor::new(&config.sensor);
    let mut controller = SamplingController::new(sensor, ConsolePresenter::new());

    let thresholds = controller.session().thresholds;
    info!(
        "Climate monitor ready (temperature alarm {}, humidity alarm {})",
        thresholds.temperature_limit, thresholds.humidity_limit
    );
    println!("{}", HELP);

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(());
        }
    });

    let lines = spawn_stdin_reader();

    // Run command loop or wait for shutdown signal
    tokio::select! {
        _ = command_loop(&mut controller, lines) => {
            info!("Program completed successfully");
        }
        _ = &mut rx => {
            info!("Program terminated by user. Exiting gracefully.");
        }
    }

    Ok(())
}
