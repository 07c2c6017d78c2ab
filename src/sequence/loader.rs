use std::{
    sync::{Arc, mpsc::Sender},
    thread::JoinHandle,
    time::Duration,
};

use crate::{
    assets::{decode::PreparedImage, source::FrameSource},
    config::SequenceConfig,
    foundation::error::{SeqError, SeqResult},
    sequence::{
        frames::FrameStore,
        state::{BootTrigger, SequenceState},
    },
};

/// Completion delivered to the host thread.
#[derive(Debug)]
pub enum LoadEvent {
    /// A fetch finished, successfully or not.
    Frame {
        /// 1-based frame index.
        index: u32,
        /// Decoded image or the fetch failure.
        result: SeqResult<PreparedImage>,
    },
    /// The one-shot fallback timer elapsed.
    FallbackElapsed,
}

/// What the host should do after applying one [`LoadEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// New value for the load label and bar, present only before boot.
    pub display_percent: Option<u8>,
    /// The first frame just arrived: paint once so something is visible.
    pub first_paint: bool,
    /// Set on the single event that won the boot race.
    pub booted: Option<BootTrigger>,
}

/// Boot-phase load percentage, relative to the threshold rather than to `N`.
///
/// Reaches 100 as soon as `threshold` frames are in, however many are still outstanding.
pub fn load_percent(loaded: u32, threshold: u32) -> u8 {
    if threshold == 0 {
        return 100;
    }
    let pct = u64::from(loaded) * 100 / u64::from(threshold);
    pct.min(100) as u8
}

/// Issues frame fetches and folds their completions into [`SequenceState`].
#[derive(Clone, Debug)]
pub struct Loader {
    frame_count: u32,
    threshold: u32,
    fallback_delay: Duration,
}

impl Loader {
    pub fn new(config: &SequenceConfig) -> Self {
        Self {
            frame_count: config.frame_count,
            threshold: config.boot_threshold,
            fallback_delay: config.fallback_delay,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Queue one fetch per frame, `1..=N`, on `pool`. Returns immediately.
    ///
    /// Each fetch posts a [`LoadEvent::Frame`] to `tx` when it settles; completions arrive in
    /// whatever order the workers finish.
    pub fn issue_all(
        &self,
        source: Arc<dyn FrameSource>,
        pool: &rayon::ThreadPool,
        tx: &Sender<LoadEvent>,
    ) {
        tracing::debug!(frames = self.frame_count, "issuing frame fetches");
        for index in 1..=self.frame_count {
            let source = Arc::clone(&source);
            let tx = tx.clone();
            pool.spawn(move || {
                let result = source.fetch(index);
                // Receiver gone means the player was dropped; the fetch is abandoned.
                let _ = tx.send(LoadEvent::Frame { index, result });
            });
        }
    }

    /// Spawn the one-shot fallback timer.
    pub fn start_fallback_timer(&self, tx: Sender<LoadEvent>) -> SeqResult<JoinHandle<()>> {
        let delay = self.fallback_delay;
        std::thread::Builder::new()
            .name("scrollseq-fallback".to_string())
            .spawn(move || {
                std::thread::sleep(delay);
                let _ = tx.send(LoadEvent::FallbackElapsed);
            })
            .map_err(|e| SeqError::load(format!("failed to spawn fallback timer: {e}")))
    }

    /// Apply one event.
    pub fn apply(
        &self,
        event: LoadEvent,
        state: &mut SequenceState,
        store: &mut FrameStore,
    ) -> LoadOutcome {
        match event {
            LoadEvent::Frame {
                index,
                result: Ok(image),
            } => self.on_frame_loaded(index, image, state, store),
            LoadEvent::Frame {
                index,
                result: Err(err),
            } => self.on_frame_failed(index, &err),
            LoadEvent::FallbackElapsed => self.on_fallback_elapsed(state),
        }
    }

    /// Record a successful completion.
    ///
    /// Out-of-range and duplicate deliveries are ignored without counting.
    pub fn on_frame_loaded(
        &self,
        index: u32,
        image: PreparedImage,
        state: &mut SequenceState,
        store: &mut FrameStore,
    ) -> LoadOutcome {
        match store.insert(index, image) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(index, "duplicate frame delivery ignored");
                return LoadOutcome::default();
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "frame delivery ignored");
                return LoadOutcome::default();
            }
        }

        let loaded = state.record_loaded();
        let mut outcome = LoadOutcome {
            first_paint: loaded == 1,
            ..LoadOutcome::default()
        };
        if !state.has_booted() {
            outcome.display_percent = Some(load_percent(loaded, self.threshold));
        }
        if loaded >= self.threshold && state.latch().try_fire(BootTrigger::Threshold) {
            tracing::info!(loaded, threshold = self.threshold, "boot threshold reached");
            outcome.booted = Some(BootTrigger::Threshold);
        }
        tracing::debug!(index, loaded, "frame loaded");
        outcome
    }

    /// Failed fetches are dropped: no retry, no count, the slot stays empty.
    pub fn on_frame_failed(&self, index: u32, err: &SeqError) -> LoadOutcome {
        tracing::warn!(index, error = %err, "frame failed to load; skipping");
        LoadOutcome::default()
    }

    /// Boot now unless the threshold already did.
    pub fn on_fallback_elapsed(&self, state: &SequenceState) -> LoadOutcome {
        if state.latch().try_fire(BootTrigger::FallbackTimer) {
            tracing::info!(
                loaded = state.loaded_count(),
                threshold = self.threshold,
                delay_ms = self.fallback_delay.as_millis() as u64,
                "fallback timer forced boot"
            );
            return LoadOutcome {
                booted: Some(BootTrigger::FallbackTimer),
                ..LoadOutcome::default()
            };
        }
        LoadOutcome::default()
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> SeqResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SeqError::validation("fetch 'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("scrollseq-fetch-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SeqError::load(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/loader.rs"]
mod tests;
