//! Asynchronous tone dispatch.
//!
//! The engine's tick loop must never block on playback. [`ToneDispatcher`]
//! moves playback onto its own thread behind a bounded channel: the runtime
//! plays into a [`ChannelToneSink`], the dispatcher thread drains the queue
//! into the real sink. A full queue drops the cue with a warning rather than
//! stalling the tick.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender, TrySendError};
use log::warn;

use crate::core::types::CueRequest;
use crate::error::{Error, Result};
use crate::host::ToneSink;

/// Cues queued before the dispatcher starts dropping.
const QUEUE_DEPTH: usize = 16;

/// Sending half: a [`ToneSink`] that forwards into the playback thread.
#[derive(Clone)]
pub struct ChannelToneSink {
    tx: Sender<CueRequest>,
}

impl ToneSink for ChannelToneSink {
    fn play(&mut self, cue: &CueRequest) -> Result<()> {
        match self.tx.try_send(*cue) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(cue)) => {
                warn!(
                    "tone queue full, dropping {} Hz / {} ms cue",
                    cue.frequency_hz, cue.duration_ms
                );
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => Err(Error::SinkClosed),
        }
    }
}

/// Playback thread handle.
pub struct ToneDispatcher {
    handle: JoinHandle<()>,
}

impl ToneDispatcher {
    /// Spawn a playback thread draining into `sink`.
    ///
    /// Returns the sending sink and the dispatcher handle. The thread exits
    /// once every [`ChannelToneSink`] clone is dropped and the queue drains.
    pub fn spawn<S: ToneSink + 'static>(mut sink: S) -> Result<(ChannelToneSink, ToneDispatcher)> {
        let (tx, rx) = bounded::<CueRequest>(QUEUE_DEPTH);
        let handle = thread::Builder::new()
            .name("tone-playback".to_string())
            .spawn(move || {
                for cue in rx {
                    if let Err(e) = sink.play(&cue) {
                        warn!("tone playback failed: {}", e);
                    }
                }
            })
            .map_err(Error::Io)?;

        Ok((ChannelToneSink { tx }, ToneDispatcher { handle }))
    }

    /// Wait for the playback thread to finish.
    ///
    /// Drop all [`ChannelToneSink`] clones first or this blocks forever.
    pub fn join(self) {
        if self.handle.join().is_err() {
            warn!("tone playback thread panicked");
        }
    }
}
