//! Host boundary traits.
//!
//! The engine never touches hardware or the host environment directly. A
//! heading source supplies one sample per tick, an activity source supplies
//! the busy signal, and a tone sink consumes cue requests. Implementations
//! for real hosts live outside this crate; [`mock`] provides scripted and
//! simulated stand-ins for tests and hardware-free runs.

pub mod channel;
pub mod mock;

use log::info;

use crate::core::types::CueRequest;
use crate::error::Result;

/// Supplies the observer's current heading, once per tick, in degrees.
///
/// Any ambient range is acceptable; the engine wraps internally.
pub trait HeadingSource: Send {
    /// Sample the current heading.
    fn heading_deg(&mut self) -> Result<f32>;
}

/// Supplies the host's busy signal (e.g. "in combat").
pub trait ActivitySource: Send {
    /// Whether the host is currently busy.
    fn is_busy(&mut self) -> Result<bool>;
}

/// Consumes cue requests and is responsible for producing sound.
pub trait ToneSink: Send {
    /// Play one tone.
    fn play(&mut self, cue: &CueRequest) -> Result<()>;
}

/// Activity source for hosts with no busy state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverBusy;

impl ActivitySource for NeverBusy {
    fn is_busy(&mut self) -> Result<bool> {
        Ok(false)
    }
}

/// Sink that logs tone requests instead of playing them.
///
/// Useful for the demo binary and for wiring up a deployment before a real
/// audio backend exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogToneSink;

impl ToneSink for LogToneSink {
    fn play(&mut self, cue: &CueRequest) -> Result<()> {
        info!("tone: {} Hz for {} ms", cue.frequency_hz, cue.duration_ms);
        Ok(())
    }
}
