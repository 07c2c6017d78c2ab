use std::sync::Arc;

use crate::{
    animation::{ease::Ease, tween::Tween},
    assets::source::FrameSource,
    config::SequenceConfig,
    foundation::{
        core::{Point, Viewport},
        error::SeqResult,
    },
    fx::{
        cursor::{CursorFollower, CursorPose},
        gauge::{GaugeReading, RpmGauge},
        reveal::{RevealFrame, RevealSet, TitleFade},
    },
    player::FramePlayer,
    scrub::{
        driver::ScrubUpdate,
        region::{ScrollRegion, ScrubFollower},
    },
    sequence::state::BootTrigger,
    ui::progress::ProgressSink,
};

const OVERLAY_FADE_SECS: f64 = 1.0;

/// Document geometry the scroll-driven effects are laid out against.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Document offset of the pinned hero track.
    pub hero_top: f64,
    /// Height of the hero track; the scrub spans `height - viewport height` of scrolling.
    pub hero_height: f64,
    /// Document offsets of the section titles and body text that reveal on scroll.
    pub section_tops: Vec<f64>,
    /// Catch-up lag of the scrub, in seconds.
    pub scrub_lag: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            hero_top: 0.0,
            hero_height: 5000.0,
            section_tops: vec![5400.0, 5600.0, 6400.0, 6600.0, 7400.0],
            scrub_lag: crate::scrub::region::DEFAULT_SCRUB_LAG,
        }
    }
}

/// One scroll notification from the smooth-scroll feed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollEvent {
    pub scroll_y: f64,
    /// Signed scroll velocity reported alongside the position.
    pub velocity: f64,
}

/// Everything the host should draw for one animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PageFrame {
    pub gauge: GaugeReading,
    pub cursor: CursorPose,
    /// Present once boot has registered the reveals.
    pub reveals: Option<RevealFrame>,
    /// Present when the scrub moved the playhead this frame.
    pub scrub: Option<ScrubUpdate>,
    pub overlay_opacity: f64,
    /// Set on the frame whose events booted the page.
    pub booted: Option<BootTrigger>,
}

/// The whole page: frame sequence player plus the independent effects that share its tick.
///
/// Call the `on_*` methods as input arrives and [`Page::tick`] once per animation frame.
pub struct Page {
    player: FramePlayer,
    layout: PageLayout,
    viewport: Viewport,
    gauge: RpmGauge,
    cursor: CursorFollower,
    follower: ScrubFollower,
    reveals: Option<RevealSet>,
    overlay: Tween,
    scroll_y: f64,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("player", &self.player)
            .field("layout", &self.layout)
            .field("viewport", &self.viewport)
            .field("scroll_y", &self.scroll_y)
            .finish_non_exhaustive()
    }
}

impl Page {
    pub fn new(
        config: SequenceConfig,
        layout: PageLayout,
        sink: Box<dyn ProgressSink>,
    ) -> SeqResult<Self> {
        let viewport = config.viewport;
        let follower = ScrubFollower::new(layout.scrub_lag);
        Ok(Self {
            player: FramePlayer::new(config, sink)?,
            layout,
            viewport,
            gauge: RpmGauge::new(),
            cursor: CursorFollower::new(viewport.center()),
            follower,
            reveals: None,
            overlay: Tween::settled(1.0),
            scroll_y: 0.0,
        })
    }

    /// Extra boot collaborator, run after the page's own boot wiring.
    pub fn with_boot_hook(mut self, hook: impl FnMut(BootTrigger) + Send + 'static) -> Self {
        self.player = self.player.with_boot_hook(hook);
        self
    }

    pub fn start(&mut self, source: Arc<dyn FrameSource>) -> SeqResult<()> {
        self.player.start(source)
    }

    pub fn player(&self) -> &FramePlayer {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut FramePlayer {
        &mut self.player
    }

    pub fn hero_region(&self) -> ScrollRegion {
        ScrollRegion::pinned(
            self.layout.hero_top,
            self.layout.hero_height,
            f64::from(self.viewport.height),
        )
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.value() > 0.0
    }

    pub fn on_scroll(&mut self, event: ScrollEvent) {
        self.scroll_y = event.scroll_y;
        self.gauge.on_scroll_velocity(event.velocity);
        self.sync_scroll_consumers();
    }

    pub fn on_pointer_move(&mut self, pointer: Point) {
        self.cursor.on_pointer_move(pointer);
    }

    pub fn on_hover(&mut self, hovering: bool) {
        self.cursor.set_hover(hovering);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.resize(viewport);
        self.sync_scroll_consumers();
    }

    /// One animation frame: apply load completions, then advance every consumer.
    pub fn tick(&mut self, dt: f64) -> PageFrame {
        self.player.pump();
        // Also catches a boot applied directly through `player_mut`.
        let winner = self.player.state().latch().winner();
        let booted = match winner {
            Some(trigger) if self.reveals.is_none() => {
                self.on_booted(trigger);
                Some(trigger)
            }
            _ => None,
        };

        let scrub = if self.player.is_booted() {
            self.follower
                .advance(dt)
                .and_then(|progress| self.player.on_scroll_progress(progress))
        } else {
            None
        };
        let scroll_y = self.scroll_y;
        let reveals = self.reveals.as_mut().map(|r| r.tick(scroll_y, dt));

        PageFrame {
            gauge: self.gauge.tick(),
            cursor: self.cursor.tick(dt),
            reveals,
            scrub,
            overlay_opacity: self.overlay.advance(dt),
            booted,
        }
    }

    fn on_booted(&mut self, trigger: BootTrigger) {
        tracing::debug!(?trigger, "registering scroll effects");
        self.overlay.retarget(0.0, OVERLAY_FADE_SECS, Ease::Linear);
        self.reveals = Some(RevealSet::new(
            TitleFade::new(self.layout.hero_top, self.layout.hero_height),
            &self.layout.section_tops,
        ));
        self.sync_scroll_consumers();
    }

    fn sync_scroll_consumers(&mut self) {
        if !self.player.is_booted() {
            return;
        }
        let progress = self.hero_region().progress(self.scroll_y);
        self.follower.set_target(progress);
        if let Some(reveals) = self.reveals.as_mut() {
            reveals.on_scroll(self.scroll_y, f64::from(self.viewport.height));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/page.rs"]
mod tests;
