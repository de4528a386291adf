//! Per-point crossing detection and repeat suppression.

use log::{debug, trace};

use crate::config::{clamp_duration, clamp_frequency, CardinalPointConfig};
use crate::core::math::{sign, wrap_degrees};
use crate::core::types::{CueAction, CueRequest, PointStatus};
use crate::error::{Error, Result};

/// One reference bearing with its action, tone parameters, and suppression
/// state.
///
/// The bearing is fixed at construction; everything else may be reconfigured
/// live. A point fires when the heading's sign relative to the bearing flips
/// between two samples while staying on the near side (< 90°), then stays
/// suppressed until the heading retreats beyond the shared suppression angle.
#[derive(Debug, Clone)]
pub struct CardinalPoint {
    name: String,
    bearing_deg: f32,
    action: CueAction,
    frequency_hz: u16,
    duration_ms: u16,
    suppressed: bool,
}

impl CardinalPoint {
    /// Create a beep point. The bearing must be finite; tone parameters are
    /// clamped to their bounds.
    pub fn new(
        name: impl Into<String>,
        bearing_deg: f32,
        frequency_hz: u16,
        duration_ms: u16,
    ) -> Result<Self> {
        let name = name.into();
        if !bearing_deg.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "bearing for point '{}' is not finite: {}",
                name, bearing_deg
            )));
        }
        let frequency_hz = clamp_frequency(&name, frequency_hz);
        let duration_ms = clamp_duration(&name, duration_ms);
        Ok(Self {
            name,
            bearing_deg,
            action: CueAction::Beep,
            frequency_hz,
            duration_ms,
            suppressed: false,
        })
    }

    /// Build a point from its configuration entry.
    pub fn from_config(config: &CardinalPointConfig) -> Result<Self> {
        let mut point = Self::new(
            config.name.clone(),
            config.bearing_deg,
            config.frequency_hz,
            config.duration_ms,
        )?;
        point.action = config.action;
        Ok(point)
    }

    /// Point label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference bearing in degrees. Immutable after construction.
    pub fn bearing_deg(&self) -> f32 {
        self.bearing_deg
    }

    /// Configured action.
    pub fn action(&self) -> CueAction {
        self.action
    }

    /// Change the action. Switching to [`CueAction::Silent`] does not clear
    /// suppression state; a silent point simply stops being evaluated.
    pub fn set_action(&mut self, action: CueAction) {
        self.action = action;
    }

    /// Configured tone frequency in Hz.
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }

    /// Set the tone frequency, clamped to the audible bounds.
    pub fn set_frequency_hz(&mut self, hz: u16) {
        self.frequency_hz = clamp_frequency(&self.name, hz);
    }

    /// Configured tone duration in milliseconds.
    pub fn duration_ms(&self) -> u16 {
        self.duration_ms
    }

    /// Set the tone duration, clamped to its bounds.
    pub fn set_duration_ms(&mut self, ms: u16) {
        self.duration_ms = clamp_duration(&self.name, ms);
    }

    /// Whether repeat cues are currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Express a heading relative to this point, wrapped into (-180, 180].
    ///
    /// 0 means exactly at the point; the sign distinguishes the two
    /// rotational sides.
    #[inline]
    pub fn relative(&self, heading_deg: f32) -> f32 {
        wrap_degrees(heading_deg - self.bearing_deg)
    }

    /// Evaluate one heading transition against this point.
    ///
    /// Returns a cue request when the transition is a genuine crossing: the
    /// relative sign flips and the new heading is on the near side (< 90°) of
    /// the bearing, ruling out jumps through the antipode. A fired cue sets
    /// the suppression flag; only retreating beyond `suppression_angle_deg`
    /// clears it.
    pub fn evaluate(
        &mut self,
        current_deg: f32,
        previous_deg: f32,
        suppression_angle_deg: f32,
    ) -> Option<CueRequest> {
        if self.action == CueAction::Silent {
            return None;
        }

        let current = self.relative(current_deg);
        let previous = self.relative(previous_deg);
        let distance = current.abs();

        if distance > suppression_angle_deg && self.suppressed {
            trace!("{}: heading left suppression band", self.name);
            self.suppressed = false;
        }
        if self.suppressed {
            return None;
        }

        if sign(current) != sign(previous) && distance < 90.0 {
            self.suppressed = true;
            debug!(
                "{} crossed ({:.1}° -> {:.1}° relative), cueing {} Hz / {} ms",
                self.name, previous, current, self.frequency_hz, self.duration_ms
            );
            return Some(CueRequest {
                frequency_hz: self.frequency_hz,
                duration_ms: self.duration_ms,
            });
        }

        None
    }

    /// Diagnostics snapshot.
    pub fn status(&self) -> PointStatus {
        PointStatus {
            name: self.name.clone(),
            bearing_deg: self.bearing_deg,
            action: self.action,
            suppressed: self.suppressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn north() -> CardinalPoint {
        CardinalPoint::new("North", 0.0, 2000, 300).unwrap()
    }

    #[test]
    fn test_relative_wraps_into_range() {
        let west = CardinalPoint::new("West", -90.0, 500, 100).unwrap();
        assert_relative_eq!(west.relative(-90.0), 0.0);
        assert_relative_eq!(west.relative(270.0), 0.0);
        assert_relative_eq!(west.relative(90.0), 180.0);

        let mut heading = -720.0;
        while heading <= 720.0 {
            let rel = west.relative(heading);
            assert!(rel > -180.0 && rel <= 180.0);
            heading += 11.0;
        }
    }

    #[test]
    fn test_smooth_crossing_fires_once() {
        let mut point = north();
        let cue = point.evaluate(-5.0, 5.0, 45.0);
        assert_eq!(
            cue,
            Some(CueRequest {
                frequency_hz: 2000,
                duration_ms: 300
            })
        );
        assert!(point.is_suppressed());
    }

    #[test]
    fn test_silent_point_never_fires_or_mutates() {
        let mut point = north();
        point.set_action(CueAction::Silent);
        assert_eq!(point.evaluate(-5.0, 5.0, 45.0), None);
        assert!(!point.is_suppressed());
    }

    #[test]
    fn test_repeat_crossing_suppressed_within_band() {
        let mut point = north();
        assert!(point.evaluate(-5.0, 5.0, 45.0).is_some());
        // Wobbling back and forth inside the band stays quiet
        assert_eq!(point.evaluate(5.0, -5.0, 45.0), None);
        assert_eq!(point.evaluate(-3.0, 5.0, 45.0), None);
        assert!(point.is_suppressed());
    }

    #[test]
    fn test_retreat_beyond_band_rearms() {
        let mut point = north();
        assert!(point.evaluate(-5.0, 5.0, 45.0).is_some());

        // Move out past the suppression angle; no crossing, but flag clears
        assert_eq!(point.evaluate(-50.0, -5.0, 45.0), None);
        assert!(!point.is_suppressed());

        // Next crossing fires again
        assert!(point.evaluate(5.0, -50.0, 45.0).is_some());
    }

    #[test]
    fn test_clear_and_fire_on_same_tick() {
        // One transition swings back through the point and lands outside the
        // band: the retreat rearms and the sign flip fires on the same
        // evaluation.
        let mut point = north();
        assert!(point.evaluate(-5.0, 5.0, 45.0).is_some());
        assert!(point.evaluate(50.0, -5.0, 45.0).is_some());
    }

    #[test]
    fn test_antipode_jump_rejected() {
        let mut point = north();
        // 5° -> -175°: the relative sign flips, but only because the heading
        // jumped through South; the 90° bound keeps North quiet
        assert_eq!(point.evaluate(-175.0, 5.0, 45.0), None);
        assert!(!point.is_suppressed());
    }

    #[test]
    fn test_exact_landing_counts_as_crossing() {
        let mut point = north();
        // sign(0) differs from sign(+5): fires on the tick that lands on the
        // bearing, not one tick later
        assert!(point.evaluate(0.0, 5.0, 45.0).is_some());
    }

    #[test]
    fn test_zero_suppression_angle() {
        let mut point = north();
        assert!(point.evaluate(-5.0, 5.0, 0.0).is_some());
        // With a zero band the very next evaluation is already rearmed
        assert!(point.evaluate(5.0, -5.0, 0.0).is_some());
    }

    #[test]
    fn test_non_finite_bearing_rejected() {
        assert!(CardinalPoint::new("bad", f32::NAN, 1000, 200).is_err());
        assert!(CardinalPoint::new("bad", f32::INFINITY, 1000, 200).is_err());
    }

    #[test]
    fn test_tone_parameters_clamped() {
        let mut point = CardinalPoint::new("North", 0.0, 20, 9999).unwrap();
        assert_eq!(point.frequency_hz(), 300);
        assert_eq!(point.duration_ms(), 500);

        point.set_frequency_hz(60_000);
        point.set_duration_ms(1);
        assert_eq!(point.frequency_hz(), 8000);
        assert_eq!(point.duration_ms(), 100);
    }
}
