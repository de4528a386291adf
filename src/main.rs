//! disha-cue demo daemon.
//!
//! Runs the compass runtime against a simulated rotating observer and logs
//! every tone request instead of playing it. Useful for exercising a
//! configuration file end to end before wiring up a real host.
//!
//! Usage: `disha-cue [<config.toml>]` or `disha-cue --config <path>`.
//! Without a config file the stock four-point N/E/S/W registry is used.

use std::env;
use std::path::Path;
use std::sync::atomic::Ordering;

use disha_cue::config::{CompassConfig, SharedConfig};
use disha_cue::host::mock::SweepSource;
use disha_cue::host::{LogToneSink, NeverBusy};
use disha_cue::runtime::CompassRuntime;
use disha_cue::Result;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `disha-cue <path>` (positional)
/// - `disha-cue --config <path>` (flag-based)
/// - `disha-cue -c <path>` (short flag)
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("disha-cue v{}", env!("CARGO_PKG_VERSION"));

    let config = match parse_config_path() {
        Some(path) => {
            log::info!("Using config: {}", path);
            CompassConfig::from_file(Path::new(&path))?
        }
        None => {
            log::info!("Using default configuration");
            CompassConfig::default()
        }
    };

    for point in &config.points {
        log::info!(
            "point {:>5} at {:>6.1}°: {:?}, {} Hz / {} ms",
            point.name,
            point.bearing_deg,
            point.action,
            point.frequency_hz,
            point.duration_ms
        );
    }

    // Simulated observer: one full turn roughly every 12 seconds at the
    // default 30 Hz tick rate.
    let sweep = SweepSource::new(0.0, 1.0);

    let mut runtime =
        CompassRuntime::new(SharedConfig::new(config), sweep, NeverBusy, LogToneSink)?;

    let shutdown = runtime.shutdown_handle();
    let mut signals =
        signal_hook::iterator::Signals::new([signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM])
            .map_err(disha_cue::Error::Io)?;
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            log::info!("received signal {}, shutting down", signal);
            shutdown.store(true, Ordering::Relaxed);
        }
    });

    runtime.run()
}
