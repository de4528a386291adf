//! Tick-driven orchestrator.
//!
//! [`CompassRuntime`] wires the host collaborators to the engine: each tick
//! it samples the heading, pairs it with the retained previous sample, runs
//! [`CompassEngine::update`], and forwards any cue requests to the tone
//! sink. Pending configuration changes are applied at the start of the tick,
//! so a tick never observes a half-applied config.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{info, trace};

use crate::config::SharedConfig;
use crate::engine::CompassEngine;
use crate::error::Result;
use crate::host::{ActivitySource, HeadingSource, ToneSink};

/// Orchestrates the sample → evaluate → dispatch loop.
pub struct CompassRuntime<H, A, S> {
    engine: CompassEngine,
    heading: H,
    activity: A,
    sink: S,
    config: SharedConfig,
    applied_generation: u64,
    tick_interval: Duration,
    previous_deg: Option<f32>,
    shutdown: Arc<AtomicBool>,
}

impl<H, A, S> CompassRuntime<H, A, S>
where
    H: HeadingSource,
    A: ActivitySource,
    S: ToneSink,
{
    /// Build a runtime from a shared configuration and host collaborators.
    pub fn new(config: SharedConfig, heading: H, activity: A, sink: S) -> Result<Self> {
        let snapshot = config.get();
        let engine = CompassEngine::from_config(&snapshot)?;
        let applied_generation = config.generation();
        Ok(Self {
            engine,
            heading,
            activity,
            sink,
            config,
            applied_generation,
            tick_interval: rate_to_interval(snapshot.update_rate_hz),
            previous_deg: None,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag polled once per tick; set it from another thread (or a signal
    /// handler) to stop [`CompassRuntime::run`].
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// The engine, for diagnostics.
    pub fn engine(&self) -> &CompassEngine {
        &self.engine
    }

    /// Run one tick. Returns the number of cues dispatched.
    ///
    /// The first tick seeds the previous-heading sample and evaluates
    /// nothing; a tick whose heading equals the previous sample is skipped
    /// outright, since an unchanged heading cannot cross anything.
    pub fn tick(&mut self) -> Result<usize> {
        self.apply_pending_config()?;

        let current = self.heading.heading_deg()?;
        let previous = match self.previous_deg {
            Some(p) => p,
            None => {
                self.previous_deg = Some(current);
                return Ok(0);
            }
        };

        if current == previous {
            return Ok(0);
        }
        self.previous_deg = Some(current);

        let busy = self.activity.is_busy()?;
        let cues = self.engine.update(current, previous, busy);
        for cue in &cues {
            self.sink.play(cue)?;
        }
        if !cues.is_empty() {
            trace!("tick dispatched {} cue(s)", cues.len());
        }
        Ok(cues.len())
    }

    /// Tick at the configured rate until the shutdown flag is set.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "compass runtime started ({} points, tick every {:?})",
            self.engine.points().len(),
            self.tick_interval
        );
        while !self.shutdown.load(Ordering::Relaxed) {
            let started = Instant::now();
            self.tick()?;
            let elapsed = started.elapsed();
            if elapsed < self.tick_interval {
                std::thread::sleep(self.tick_interval - elapsed);
            }
        }
        info!("compass runtime stopped");
        Ok(())
    }

    fn apply_pending_config(&mut self) -> Result<()> {
        let generation = self.config.generation();
        if generation == self.applied_generation {
            return Ok(());
        }
        let snapshot = self.config.get();
        self.engine.apply_config(&snapshot)?;
        self.tick_interval = rate_to_interval(snapshot.update_rate_hz);
        self.applied_generation = generation;
        info!("applied configuration generation {}", generation);
        Ok(())
    }
}

fn rate_to_interval(rate_hz: f32) -> Duration {
    Duration::from_secs_f32(1.0 / rate_hz)
}
