//! Configuration for the compass engine and runtime.
//!
//! Loaded from a TOML file with every field defaulted, so an empty file (or
//! no file at all) yields the stock four-point N/E/S/W registry. Out-of-range
//! values are clamped to their documented bounds at load time and at every
//! later assignment; evaluation itself never validates.

use std::path::Path;

use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::types::CueAction;
use crate::error::Result;

/// Lowest tone frequency a point may be configured with (Hz).
pub const MIN_FREQUENCY_HZ: u16 = 300;
/// Highest tone frequency a point may be configured with (Hz).
pub const MAX_FREQUENCY_HZ: u16 = 8000;
/// Shortest tone duration (ms).
pub const MIN_DURATION_MS: u16 = 100;
/// Longest tone duration (ms).
pub const MAX_DURATION_MS: u16 = 500;
/// Largest allowed suppression angle (degrees). Lower bound is 0.
pub const MAX_SUPPRESSION_ANGLE_DEG: f32 = 45.0;
/// Slowest allowed tick rate (Hz).
pub const MIN_UPDATE_RATE_HZ: f32 = 1.0;
/// Fastest allowed tick rate (Hz).
pub const MAX_UPDATE_RATE_HZ: f32 = 200.0;

/// Clamp a tone frequency to the audible bounds, warning when it moves.
pub fn clamp_frequency(label: &str, hz: u16) -> u16 {
    let clamped = hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ);
    if clamped != hz {
        warn!("{}: frequency {} Hz clamped to {} Hz", label, hz, clamped);
    }
    clamped
}

/// Clamp a tone duration, warning when it moves.
pub fn clamp_duration(label: &str, ms: u16) -> u16 {
    let clamped = ms.clamp(MIN_DURATION_MS, MAX_DURATION_MS);
    if clamped != ms {
        warn!("{}: duration {} ms clamped to {} ms", label, ms, clamped);
    }
    clamped
}

/// Clamp the shared suppression angle, warning when it moves.
///
/// Non-finite values fall back to the default rather than propagating NaN
/// into every evaluation.
pub fn clamp_suppression_angle(deg: f32) -> f32 {
    if !deg.is_finite() {
        warn!(
            "suppression angle {} is not finite, using default {}",
            deg,
            default_suppression_angle()
        );
        return default_suppression_angle();
    }
    let clamped = deg.clamp(0.0, MAX_SUPPRESSION_ANGLE_DEG);
    if clamped != deg {
        warn!(
            "suppression angle {}° clamped to {}°",
            deg, clamped
        );
    }
    clamped
}

fn clamp_update_rate(hz: f32) -> f32 {
    if !hz.is_finite() {
        warn!(
            "update rate {} is not finite, using default {}",
            hz,
            default_update_rate()
        );
        return default_update_rate();
    }
    let clamped = hz.clamp(MIN_UPDATE_RATE_HZ, MAX_UPDATE_RATE_HZ);
    if clamped != hz {
        warn!("update rate {} Hz clamped to {} Hz", hz, clamped);
    }
    clamped
}

/// Settings for one cardinal point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardinalPointConfig {
    /// Point label, used in logs and diagnostics.
    pub name: String,

    /// Reference bearing in degrees. 0 = North, 90 = East, 180 = South,
    /// -90 (or 270) = West.
    pub bearing_deg: f32,

    /// Whether crossing this point cues at all (default: beep).
    #[serde(default)]
    pub action: CueAction,

    /// Tone frequency in Hz, clamped to 300-8000 (default: 1000).
    #[serde(default = "default_frequency")]
    pub frequency_hz: u16,

    /// Tone duration in milliseconds, clamped to 100-500 (default: 200).
    #[serde(default = "default_duration")]
    pub duration_ms: u16,
}

impl CardinalPointConfig {
    /// Shorthand for a fully-specified beep point.
    pub fn beep(name: &str, bearing_deg: f32, frequency_hz: u16, duration_ms: u16) -> Self {
        Self {
            name: name.to_string(),
            bearing_deg,
            action: CueAction::Beep,
            frequency_hz,
            duration_ms,
        }
    }
}

/// Top-level engine and runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Angular distance from a point within which a fired cue is not
    /// repeated, clamped to 0-45 degrees (default: 45).
    #[serde(default = "default_suppression_angle")]
    pub suppression_angle_deg: f32,

    /// Mute all cues while the host reports a busy state (default: off).
    #[serde(default)]
    pub suppress_when_busy: bool,

    /// Tick rate of the runtime loop in Hz (default: 30).
    #[serde(default = "default_update_rate")]
    pub update_rate_hz: f32,

    /// Cardinal point registry, evaluated in order (default: N/E/S/W).
    #[serde(default = "default_points")]
    pub points: Vec<CardinalPointConfig>,
}

fn default_suppression_angle() -> f32 {
    45.0
}

fn default_update_rate() -> f32 {
    30.0
}

fn default_frequency() -> u16 {
    1000
}

fn default_duration() -> u16 {
    200
}

fn default_points() -> Vec<CardinalPointConfig> {
    vec![
        CardinalPointConfig::beep("North", 0.0, 2000, 300),
        CardinalPointConfig::beep("East", 90.0, 1500, 100),
        CardinalPointConfig::beep("South", 180.0, 1000, 300),
        CardinalPointConfig::beep("West", -90.0, 500, 100),
    ]
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            suppression_angle_deg: default_suppression_angle(),
            suppress_when_busy: false,
            update_rate_hz: default_update_rate(),
            points: default_points(),
        }
    }
}

impl CompassConfig {
    /// Load configuration from a TOML file, clamping out-of-range values.
    ///
    /// # Example
    /// ```no_run
    /// use disha_cue::config::CompassConfig;
    ///
    /// let config = CompassConfig::from_file("disha.toml")?;
    /// # Ok::<(), disha_cue::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: CompassConfig = toml::from_str(&contents)?;
        config.clamp_to_bounds();
        Ok(config)
    }

    /// Clamp every bounded field in place.
    pub fn clamp_to_bounds(&mut self) {
        self.suppression_angle_deg = clamp_suppression_angle(self.suppression_angle_deg);
        self.update_rate_hz = clamp_update_rate(self.update_rate_hz);
        for point in &mut self.points {
            point.frequency_hz = clamp_frequency(&point.name, point.frequency_hz);
            point.duration_ms = clamp_duration(&point.name, point.duration_ms);
        }
    }
}

struct SharedConfigInner {
    config: RwLock<CompassConfig>,
    generation: AtomicU64,
}

/// Thread-safe handle for live configuration updates.
///
/// A settings collaborator mutates the config through [`SharedConfig::update`];
/// the runtime compares [`SharedConfig::generation`] against the generation it
/// last applied and re-applies at the start of its next tick. A tick never
/// observes a half-written config.
#[derive(Clone)]
pub struct SharedConfig {
    inner: Arc<SharedConfigInner>,
}

impl SharedConfig {
    /// Wrap a configuration for sharing. Clamps it first.
    pub fn new(mut config: CompassConfig) -> Self {
        config.clamp_to_bounds();
        Self {
            inner: Arc::new(SharedConfigInner {
                config: RwLock::new(config),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Mutate the configuration and publish the change.
    ///
    /// The mutation runs under the write lock; bounds are re-clamped before
    /// the generation counter is bumped.
    pub fn update<F: FnOnce(&mut CompassConfig)>(&self, f: F) {
        let mut config = self.inner.config.write();
        f(&mut config);
        config.clamp_to_bounds();
        drop(config);
        self.inner.generation.fetch_add(1, Ordering::Release);
    }

    /// Snapshot the current configuration.
    pub fn get(&self) -> CompassConfig {
        self.inner.config.read().clone()
    }

    /// Monotonic change counter, bumped once per [`SharedConfig::update`].
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }
}
