//! Mock host collaborators for testing and hardware-free runs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::core::math::wrap_degrees;
use crate::core::types::CueRequest;
use crate::error::Result;
use crate::host::{ActivitySource, HeadingSource, ToneSink};

/// Heading source fed from an injected script of samples.
///
/// Cloning shares the underlying script, so a test can keep one handle for
/// injection while the runtime owns the other. Once the script runs dry the
/// last sample repeats.
#[derive(Clone)]
pub struct ScriptedHeadings {
    inner: Arc<Mutex<ScriptedHeadingsInner>>,
}

struct ScriptedHeadingsInner {
    samples: VecDeque<f32>,
    last: f32,
}

impl ScriptedHeadings {
    /// Create a script starting from the given samples.
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScriptedHeadingsInner {
                samples: samples.into_iter().collect(),
                last: 0.0,
            })),
        }
    }

    /// Append samples to the script.
    pub fn inject(&self, samples: impl IntoIterator<Item = f32>) {
        let mut inner = self.inner.lock().unwrap();
        inner.samples.extend(samples);
    }

    /// Samples not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inner.lock().unwrap().samples.len()
    }
}

impl HeadingSource for ScriptedHeadings {
    fn heading_deg(&mut self) -> Result<f32> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(sample) = inner.samples.pop_front() {
            inner.last = sample;
        }
        Ok(inner.last)
    }
}

/// Activity source driven by a shared flag.
#[derive(Clone, Default)]
pub struct SharedActivity {
    busy: Arc<Mutex<bool>>,
}

impl SharedActivity {
    /// Create an idle activity source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the busy flag.
    pub fn set_busy(&self, busy: bool) {
        *self.busy.lock().unwrap() = busy;
    }
}

impl ActivitySource for SharedActivity {
    fn is_busy(&mut self) -> Result<bool> {
        Ok(*self.busy.lock().unwrap())
    }
}

/// Sink that records every cue request.
#[derive(Clone, Default)]
pub struct MockToneSink {
    played: Arc<Mutex<Vec<CueRequest>>>,
}

impl MockToneSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All cues played so far.
    pub fn played(&self) -> Vec<CueRequest> {
        self.played.lock().unwrap().clone()
    }

    /// Forget recorded cues.
    pub fn clear(&self) {
        self.played.lock().unwrap().clear();
    }
}

impl ToneSink for MockToneSink {
    fn play(&mut self, cue: &CueRequest) -> Result<()> {
        self.played.lock().unwrap().push(*cue);
        Ok(())
    }
}

/// Simulated observer rotating at a constant rate.
///
/// Each sample advances the heading by `step_deg`, wrapped into
/// (-180, 180]. Drives the demo binary without a real host.
pub struct SweepSource {
    heading_deg: f32,
    step_deg: f32,
}

impl SweepSource {
    /// Start at `start_deg`, advancing `step_deg` per sample.
    pub fn new(start_deg: f32, step_deg: f32) -> Self {
        Self {
            heading_deg: start_deg,
            step_deg,
        }
    }
}

impl HeadingSource for SweepSource {
    fn heading_deg(&mut self) -> Result<f32> {
        self.heading_deg = wrap_degrees(self.heading_deg + self.step_deg);
        Ok(self.heading_deg)
    }
}
