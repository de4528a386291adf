//! Core data types for cues and engine diagnostics.

use serde::{Deserialize, Serialize};

/// What crossing a cardinal point does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueAction {
    /// Crossing never produces a cue.
    Silent,
    /// Crossing produces a tone request.
    Beep,
}

impl Default for CueAction {
    fn default() -> Self {
        CueAction::Beep
    }
}

/// Request to play one tone.
///
/// The engine only describes *what* to play; producing sound is the tone
/// sink's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueRequest {
    /// Tone frequency in Hz.
    pub frequency_hz: u16,
    /// Tone duration in milliseconds.
    pub duration_ms: u16,
}

/// Engine diagnostics snapshot.
#[derive(Debug, Clone)]
pub struct CompassStatus {
    /// Heading transitions evaluated since construction.
    pub ticks: u64,
    /// Cue requests emitted since construction.
    pub cues_emitted: u64,
    /// Per-point state in registry order.
    pub points: Vec<PointStatus>,
}

/// Per-point diagnostics.
#[derive(Debug, Clone)]
pub struct PointStatus {
    /// Point label.
    pub name: String,
    /// Reference bearing in degrees.
    pub bearing_deg: f32,
    /// Configured action.
    pub action: CueAction,
    /// Whether repeat cues are currently suppressed.
    pub suppressed: bool,
}
