use crate::{
    foundation::core::{clamp_frame, whole_frame},
    render::{
        renderer::{RenderOutcome, Renderer},
        surface::Surface,
    },
    sequence::{frames::FrameStore, state::SequenceState},
    ui::progress::{ProgressSink, format_frame_label},
};

/// Indicator values produced by one scrub update.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubUpdate {
    /// Fractional playhead after the update.
    pub current_frame: f64,
    /// `floor(current_frame)`.
    pub whole_frame: u32,
    /// Counter text written to the frame label.
    pub frame_label: String,
    /// HUD fill width in percent.
    pub fill_percent: f64,
    /// What the renderer did.
    pub render: RenderOutcome,
}

/// Maps scroll progress onto the frame sequence and repaints.
#[derive(Clone, Copy, Debug)]
pub struct ScrubDriver {
    frame_count: u32,
    renderer: Renderer,
}

impl ScrubDriver {
    pub fn new(frame_count: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            renderer: Renderer::new(),
        }
    }

    /// Linear map `p -> 1 + p * (N - 1)`, clamped to `[1, N]`.
    pub fn frame_for_progress(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        clamp_frame(1.0 + p * f64::from(self.frame_count - 1), self.frame_count)
    }

    /// Move the playhead to `progress`, repaint, then refresh the frame label and HUD bar.
    pub fn update(
        &self,
        progress: f64,
        state: &mut SequenceState,
        store: &FrameStore,
        surface: &mut Surface,
        sink: &mut dyn ProgressSink,
    ) -> ScrubUpdate {
        state.set_current_frame(self.frame_for_progress(progress));
        let current_frame = state.current_frame();
        let render = self.renderer.render(store, current_frame, surface);

        let whole = whole_frame(current_frame, self.frame_count);
        let frame_label = format_frame_label(whole, self.frame_count);
        let fill_percent = f64::from(whole) / f64::from(self.frame_count) * 100.0;
        sink.set_frame_label(&frame_label);
        sink.set_hud_fill(fill_percent);

        ScrubUpdate {
            current_frame,
            whole_frame: whole,
            frame_label,
            fill_percent,
            render,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scrub/driver.rs"]
mod tests;
