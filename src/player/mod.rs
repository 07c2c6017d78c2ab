use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    time::{Duration, Instant},
};

use crate::{
    assets::source::FrameSource,
    config::SequenceConfig,
    foundation::{
        core::Viewport,
        error::{SeqError, SeqResult},
    },
    render::{
        renderer::{RenderOutcome, Renderer},
        surface::Surface,
    },
    scrub::driver::{ScrubDriver, ScrubUpdate},
    sequence::{
        frames::FrameStore,
        loader::{LoadEvent, LoadOutcome, Loader, build_thread_pool},
        state::{BootTrigger, SequenceState},
    },
    ui::progress::{ProgressSink, format_load_label},
};

/// Downstream collaborator run exactly once when the page becomes interactive.
pub type BootHook = Box<dyn FnMut(BootTrigger) + Send>;

/// Summary of one [`FramePlayer::pump`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Events applied.
    pub events: usize,
    /// Set when one of those events booted the player.
    pub booted: Option<BootTrigger>,
}

/// Frame sequence player: loader, renderer and scrub driver around one [`SequenceState`].
///
/// All state changes happen on the thread that owns the player. Fetch workers and the
/// fallback timer only post [`LoadEvent`]s, which are applied by [`FramePlayer::pump`],
/// [`FramePlayer::wait_for_boot`] or [`FramePlayer::handle_event`].
pub struct FramePlayer {
    config: SequenceConfig,
    loader: Loader,
    state: SequenceState,
    store: FrameStore,
    renderer: Renderer,
    surface: Surface,
    scrub: Option<ScrubDriver>,
    sink: Box<dyn ProgressSink>,
    on_boot: Option<BootHook>,
    tx: Sender<LoadEvent>,
    rx: Receiver<LoadEvent>,
    settled: u32,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for FramePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramePlayer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("loaded", &self.store.loaded_len())
            .field("settled", &self.settled)
            .field("scrub_active", &self.scrub.is_some())
            .field("started", &self.pool.is_some())
            .finish()
    }
}

impl FramePlayer {
    /// Build an idle player. Nothing is fetched until [`FramePlayer::start`].
    pub fn new(config: SequenceConfig, sink: Box<dyn ProgressSink>) -> SeqResult<Self> {
        config.validate()?;
        let (tx, rx) = mpsc::channel();
        let mut player = Self {
            loader: Loader::new(&config),
            state: SequenceState::new(config.frame_count),
            store: FrameStore::new(config.frame_count),
            renderer: Renderer::new(),
            surface: Surface::new(config.viewport),
            scrub: None,
            sink,
            on_boot: None,
            tx,
            rx,
            settled: 0,
            pool: None,
            config,
        };
        player.render();
        Ok(player)
    }

    /// Install the boot collaborator.
    pub fn with_boot_hook(mut self, hook: impl FnMut(BootTrigger) + Send + 'static) -> Self {
        self.on_boot = Some(Box::new(hook));
        self
    }

    /// Issue every fetch and arm the fallback timer. May be called once.
    #[tracing::instrument(skip_all, fields(frames = self.config.frame_count))]
    pub fn start(&mut self, source: Arc<dyn FrameSource>) -> SeqResult<()> {
        if self.pool.is_some() {
            return Err(SeqError::validation("player already started"));
        }
        let pool = build_thread_pool(self.config.threads)?;
        self.loader.issue_all(source, &pool, &self.tx);
        // Detached: the timer's only effect is one event, which is a no-op after boot.
        let _timer = self.loader.start_fallback_timer(self.tx.clone())?;
        self.pool = Some(pool);
        Ok(())
    }

    /// Apply one load event and run its side effects (indicators, first paint, boot).
    pub fn handle_event(&mut self, event: LoadEvent) -> LoadOutcome {
        if matches!(event, LoadEvent::Frame { .. }) {
            self.settled = self.settled.saturating_add(1);
        }
        let outcome = self.loader.apply(event, &mut self.state, &mut self.store);

        if let Some(pct) = outcome.display_percent {
            self.sink.set_load_label(&format_load_label(pct));
            self.sink.set_load_bar(f64::from(pct));
        }
        if outcome.first_paint {
            self.render();
        }
        if let Some(trigger) = outcome.booted {
            self.boot(trigger);
        }
        outcome
    }

    /// Apply every event already queued, without blocking.
    pub fn pump(&mut self) -> PumpReport {
        let mut report = PumpReport::default();
        while let Ok(event) = self.rx.try_recv() {
            let outcome = self.handle_event(event);
            report.events += 1;
            if outcome.booted.is_some() {
                report.booted = outcome.booted;
            }
        }
        report
    }

    /// Block until boot. The fallback timer bounds the wait.
    pub fn wait_for_boot(&mut self) -> SeqResult<BootTrigger> {
        if let Some(trigger) = self.state.latch().winner() {
            return Ok(trigger);
        }
        if self.pool.is_none() {
            return Err(SeqError::validation(
                "wait_for_boot requires a started player",
            ));
        }
        loop {
            let event = self
                .rx
                .recv()
                .map_err(|_| SeqError::load("load event channel disconnected"))?;
            if let Some(trigger) = self.handle_event(event).booted {
                return Ok(trigger);
            }
        }
    }

    /// Block until every fetch has settled or `timeout` elapses. Returns `true` when all settled.
    pub fn wait_for_all(&mut self, timeout: Duration) -> SeqResult<bool> {
        if self.pool.is_none() {
            return Err(SeqError::validation("wait_for_all requires a started player"));
        }
        let deadline = Instant::now() + timeout;
        while self.settled < self.config.frame_count {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(event) => {
                    self.handle_event(event);
                }
                Err(RecvTimeoutError::Timeout) => return Ok(false),
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(SeqError::load("load event channel disconnected"));
                }
            }
        }
        Ok(true)
    }

    /// Feed scroll progress for the hero region. Ignored until boot registers the driver.
    pub fn on_scroll_progress(&mut self, progress: f64) -> Option<ScrubUpdate> {
        let driver = self.scrub?;
        Some(driver.update(
            progress,
            &mut self.state,
            &self.store,
            &mut self.surface,
            self.sink.as_mut(),
        ))
    }

    /// Reset the surface to `viewport` and repaint the current frame.
    pub fn resize(&mut self, viewport: Viewport) -> RenderOutcome {
        tracing::debug!(width = viewport.width, height = viewport.height, "resize");
        self.surface.resize(viewport);
        self.render()
    }

    /// Repaint the frame under the playhead.
    pub fn render(&mut self) -> RenderOutcome {
        self.renderer
            .render(&self.store, self.state.current_frame(), &mut self.surface)
    }

    fn boot(&mut self, trigger: BootTrigger) {
        tracing::info!(
            ?trigger,
            loaded = self.state.loaded_count(),
            "sequence booted"
        );
        self.scrub = Some(ScrubDriver::new(self.config.frame_count));
        if let Some(hook) = self.on_boot.as_mut() {
            hook(trigger);
        }
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn store(&self) -> &FrameStore {
        &self.store
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_booted(&self) -> bool {
        self.state.has_booted()
    }

    /// Fetches that have completed, successfully or not.
    pub fn settled_count(&self) -> u32 {
        self.settled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/player.rs"]
mod tests;
