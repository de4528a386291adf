//! disha-cue - directional audio-cue engine
//!
//! Watches a stream of heading samples and emits a tone request whenever the
//! heading crosses a configured reference bearing ("cardinal point"). Built
//! for users who perceive orientation through sound rather than vision: each
//! cardinal point carries its own tone, and a hysteresis band keeps a slow
//! wobble around a point from machine-gunning cues.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    runtime/                         │  ← Tick loop
//! │        (sample, pair, evaluate, dispatch)           │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     host/                           │  ← Boundary traits
//! │     (heading source, activity source, tone sink,    │
//! │              channel dispatch, mocks)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Core logic
//! │        (cardinal points, crossing detection,        │
//! │               repeat suppression)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (angle math, types)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use disha_cue::{CompassConfig, CompassEngine};
//!
//! let mut engine = CompassEngine::from_config(&CompassConfig::default())?;
//!
//! // Heading swings from 5° to -5°: that crosses North (0°)
//! let cues = engine.update(-5.0, 5.0, false);
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].frequency_hz, 2000);
//! # Ok::<(), disha_cue::Error>(())
//! ```
//!
//! The engine itself is synchronous and single-threaded: one
//! `(current, previous)` heading pair in, zero or more cue requests out.
//! Everything host-facing (where headings come from, how tones are played)
//! sits behind the traits in [`host`].

// Core foundation (no internal deps)
pub mod core;

// Crossing-detection engine (depends on core)
pub mod engine;

// Ambient stack
pub mod config;
pub mod error;

// Host boundary (depends on core)
pub mod host;

// Orchestration (depends on everything above)
pub mod runtime;

// Convenience re-exports
pub use crate::config::{CardinalPointConfig, CompassConfig, SharedConfig};
pub use crate::core::types::{CompassStatus, CueAction, CueRequest, PointStatus};
pub use crate::engine::{CardinalPoint, CompassEngine};
pub use crate::error::{Error, Result};
pub use crate::host::channel::{ChannelToneSink, ToneDispatcher};
pub use crate::host::{ActivitySource, HeadingSource, LogToneSink, NeverBusy, ToneSink};
pub use crate::runtime::CompassRuntime;
