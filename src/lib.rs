//! scrollseq plays an image sequence scrubbed by scroll position.
//!
//! A page boots as soon as enough frames of the sequence have arrived, then maps scroll
//! progress across a pinned hero region onto a frame index and paints that frame into a
//! viewport-sized surface.
//!
//! # Pipeline overview
//!
//! 1. **Load**: N fetches are issued eagerly on a worker pool; completions come back as
//!    [`LoadEvent`]s and are applied on the owning thread in arrival order.
//! 2. **Boot**: the first of {`boot_threshold` frames loaded, fallback delay elapsed} fires the
//!    boot transition exactly once ([`BootLatch`]).
//! 3. **Scrub**: scroll progress `p` maps to frame `1 + p * (N - 1)` ([`ScrubDriver`]).
//! 4. **Render**: the frame under the playhead is cover-fit into the [`Surface`]
//!    ([`Renderer`]). Missing frames are skipped, never an error.
//!
//! [`Page`] composes the player with the effects that share its per-frame tick: the RPM
//! gauge, the crosshair cursor and the scroll reveals.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod foundation;
mod fx;
mod page;
mod player;
mod render;
mod scrub;
mod sequence;
mod ui;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use assets::decode::{PreparedImage, decode_image};
pub use assets::naming::{FrameNaming, frame_rel_path};
pub use assets::source::{DirSource, FrameSource};
pub use config::{
    DEFAULT_BOOT_THRESHOLD, DEFAULT_FALLBACK_DELAY, DEFAULT_FRAME_COUNT, DEFAULT_PAD_WIDTH,
    SequenceConfig,
};
pub use foundation::core::{Point, Vec2, Viewport, clamp_frame, whole_frame};
pub use foundation::error::{SeqError, SeqResult};
pub use foundation::math::{lerp, progress_between};
pub use fx::cursor::{ACCENT_DOT_COLOR, CursorFollower, CursorPose, HOVER_DOT_COLOR};
pub use fx::gauge::{GaugeReading, IDLE_RPM, MAX_RPM, REDLINE_RPM, RpmGauge};
pub use fx::reveal::{RevealFrame, RevealSet, RevealStyle, SectionReveal, TitleFade};
pub use page::{Page, PageFrame, PageLayout, ScrollEvent};
pub use player::{BootHook, FramePlayer, PumpReport};
pub use render::composite::{PremulRgba8, over, unpremultiply};
pub use render::cover::CoverFit;
pub use render::renderer::{RenderOutcome, Renderer};
pub use render::surface::Surface;
pub use scrub::driver::{ScrubDriver, ScrubUpdate};
pub use scrub::region::{DEFAULT_SCRUB_LAG, ScrollRegion, ScrubFollower};
pub use sequence::frames::{FrameInfo, FrameStore};
pub use sequence::loader::{LoadEvent, LoadOutcome, Loader, load_percent};
pub use sequence::state::{BootLatch, BootTrigger, SequenceState};
pub use ui::progress::{
    ProgressIndicators, ProgressSink, SharedIndicators, TracingSink, format_frame_label,
    format_load_label,
};
