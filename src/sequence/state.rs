use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};

use crate::foundation::core::clamp_frame;

/// What caused the one-time boot transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BootTrigger {
    /// Enough frames arrived.
    Threshold,
    /// The fallback delay elapsed first.
    FallbackTimer,
}

const ARMED: u8 = 0;
const FIRED_THRESHOLD: u8 = 1;
const FIRED_TIMER: u8 = 2;

/// One-shot latch: the first `try_fire` wins, every later call is a no-op.
#[derive(Debug, Default)]
pub struct BootLatch {
    state: AtomicU8,
}

impl BootLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt the `false -> true` transition. Returns `true` for exactly one caller.
    pub fn try_fire(&self, trigger: BootTrigger) -> bool {
        let code = match trigger {
            BootTrigger::Threshold => FIRED_THRESHOLD,
            BootTrigger::FallbackTimer => FIRED_TIMER,
        };
        self.state
            .compare_exchange(ARMED, code, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) != ARMED
    }

    /// The trigger that won, if any.
    pub fn winner(&self) -> Option<BootTrigger> {
        match self.state.load(Ordering::Acquire) {
            FIRED_THRESHOLD => Some(BootTrigger::Threshold),
            FIRED_TIMER => Some(BootTrigger::FallbackTimer),
            _ => None,
        }
    }
}

/// Mutable state shared by loader, renderer and scrub driver for one player.
#[derive(Clone, Debug)]
pub struct SequenceState {
    frame_count: u32,
    current_frame: f64,
    loaded_count: u32,
    latch: Arc<BootLatch>,
}

impl SequenceState {
    /// Fresh state positioned on frame 1 with nothing loaded.
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current_frame: 1.0,
            loaded_count: 0,
            latch: Arc::new(BootLatch::new()),
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Fractional, 1-based playhead; always within `[1, N]`.
    pub fn current_frame(&self) -> f64 {
        self.current_frame
    }

    /// Move the playhead, clamping to `[1, N]`.
    pub fn set_current_frame(&mut self, frame: f64) {
        self.current_frame = clamp_frame(frame, self.frame_count);
    }

    pub fn loaded_count(&self) -> u32 {
        self.loaded_count
    }

    pub(crate) fn record_loaded(&mut self) -> u32 {
        self.loaded_count = self.loaded_count.saturating_add(1);
        self.loaded_count
    }

    pub fn has_booted(&self) -> bool {
        self.latch.is_fired()
    }

    /// Latch handle, shareable with other threads.
    pub fn latch(&self) -> &Arc<BootLatch> {
        &self.latch
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/state.rs"]
mod tests;
