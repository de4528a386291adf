//! Cardinal-point registry and per-tick fan-out.

use log::{debug, info};

use crate::config::{clamp_suppression_angle, CompassConfig};
use crate::core::types::{CompassStatus, CueRequest};
use crate::engine::point::CardinalPoint;
use crate::error::{Error, Result};

/// Owns the ordered point registry, the shared suppression angle, and the
/// busy gate.
///
/// Each heading transition is fanned out to every point independently;
/// points evaluate in registry order and the returned cue requests preserve
/// that order. Adjacent points may both fire on one tick; no deduplication
/// happens here.
#[derive(Debug)]
pub struct CompassEngine {
    points: Vec<CardinalPoint>,
    suppression_angle_deg: f32,
    suppress_when_busy: bool,
    ticks: u64,
    cues_emitted: u64,
}

impl CompassEngine {
    /// Create an engine with an explicit registry.
    pub fn new(
        points: Vec<CardinalPoint>,
        suppression_angle_deg: f32,
        suppress_when_busy: bool,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::InvalidParameter(
                "no cardinal points configured".to_string(),
            ));
        }
        Ok(Self {
            points,
            suppression_angle_deg: clamp_suppression_angle(suppression_angle_deg),
            suppress_when_busy,
            ticks: 0,
            cues_emitted: 0,
        })
    }

    /// Build the registry from configuration.
    pub fn from_config(config: &CompassConfig) -> Result<Self> {
        let points = config
            .points
            .iter()
            .map(CardinalPoint::from_config)
            .collect::<Result<Vec<_>>>()?;
        Self::new(
            points,
            config.suppression_angle_deg,
            config.suppress_when_busy,
        )
    }

    /// Evaluate one heading transition against every point.
    ///
    /// With the busy gate armed and `busy` set, nothing is evaluated: no
    /// cues, no suppression-state changes. A crossing that happens while
    /// busy is simply never observed.
    pub fn update(&mut self, current_deg: f32, previous_deg: f32, busy: bool) -> Vec<CueRequest> {
        self.ticks += 1;

        if self.suppress_when_busy && busy {
            return Vec::new();
        }

        let mut cues = Vec::new();
        for point in &mut self.points {
            if let Some(cue) = point.evaluate(current_deg, previous_deg, self.suppression_angle_deg)
            {
                cues.push(cue);
            }
        }
        self.cues_emitted += cues.len() as u64;
        cues
    }

    /// Re-apply configuration in place.
    ///
    /// Tone parameters, actions, the suppression angle and the busy gate
    /// update live without disturbing suppression state. If the point set
    /// itself changed (count, names, or bearings), the registry is rebuilt
    /// and suppression state starts over.
    pub fn apply_config(&mut self, config: &CompassConfig) -> Result<()> {
        let same_registry = self.points.len() == config.points.len()
            && self
                .points
                .iter()
                .zip(&config.points)
                .all(|(p, c)| p.name() == c.name && p.bearing_deg() == c.bearing_deg);

        if same_registry {
            for (point, point_config) in self.points.iter_mut().zip(&config.points) {
                point.set_action(point_config.action);
                point.set_frequency_hz(point_config.frequency_hz);
                point.set_duration_ms(point_config.duration_ms);
            }
            debug!("configuration updated in place");
        } else {
            if config.points.is_empty() {
                return Err(Error::InvalidParameter(
                    "no cardinal points configured".to_string(),
                ));
            }
            self.points = config
                .points
                .iter()
                .map(CardinalPoint::from_config)
                .collect::<Result<Vec<_>>>()?;
            info!(
                "cardinal point registry rebuilt ({} points), suppression state reset",
                self.points.len()
            );
        }

        self.suppression_angle_deg = clamp_suppression_angle(config.suppression_angle_deg);
        self.suppress_when_busy = config.suppress_when_busy;
        Ok(())
    }

    /// The point registry in evaluation order.
    pub fn points(&self) -> &[CardinalPoint] {
        &self.points
    }

    /// Shared suppression angle in degrees.
    pub fn suppression_angle_deg(&self) -> f32 {
        self.suppression_angle_deg
    }

    /// Set the shared suppression angle, clamped to 0-45 degrees.
    pub fn set_suppression_angle_deg(&mut self, deg: f32) {
        self.suppression_angle_deg = clamp_suppression_angle(deg);
    }

    /// Whether the busy gate is armed.
    pub fn suppress_when_busy(&self) -> bool {
        self.suppress_when_busy
    }

    /// Arm or disarm the busy gate.
    pub fn set_suppress_when_busy(&mut self, enabled: bool) {
        self.suppress_when_busy = enabled;
    }

    /// Diagnostics snapshot.
    pub fn status(&self) -> CompassStatus {
        CompassStatus {
            ticks: self.ticks,
            cues_emitted: self.cues_emitted,
            points: self.points.iter().map(|p| p.status()).collect(),
        }
    }
}
