use std::sync::{Arc, Mutex};

/// Write-only progress indicators: load label and bar, frame label and HUD bar.
pub trait ProgressSink: Send {
    /// Zero-padded load percentage, e.g. `"028"`.
    fn set_load_label(&mut self, text: &str);
    /// Load bar width in percent.
    fn set_load_bar(&mut self, percent: f64);
    /// Frame counter, e.g. `"042 / 300"`.
    fn set_frame_label(&mut self, text: &str);
    /// HUD fill bar width in percent.
    fn set_hud_fill(&mut self, percent: f64);
}

/// Load label text for a percentage.
pub fn format_load_label(percent: u8) -> String {
    format!("{percent:03}")
}

/// Frame counter text: the whole frame zero-padded to three digits, then the total.
pub fn format_frame_label(frame: u32, frame_count: u32) -> String {
    format!("{frame:03} / {frame_count}")
}

/// Sink that remembers the last value written to each indicator.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ProgressIndicators {
    pub load_label: Option<String>,
    pub load_bar: Option<f64>,
    pub frame_label: Option<String>,
    pub hud_fill: Option<f64>,
}

impl ProgressSink for ProgressIndicators {
    fn set_load_label(&mut self, text: &str) {
        self.load_label = Some(text.to_string());
    }

    fn set_load_bar(&mut self, percent: f64) {
        self.load_bar = Some(percent);
    }

    fn set_frame_label(&mut self, text: &str) {
        self.frame_label = Some(text.to_string());
    }

    fn set_hud_fill(&mut self, percent: f64) {
        self.hud_fill = Some(percent);
    }
}

/// Shared handle so a host can read indicators a player writes to.
pub type SharedIndicators = Arc<Mutex<ProgressIndicators>>;

impl ProgressSink for SharedIndicators {
    fn set_load_label(&mut self, text: &str) {
        if let Ok(mut inner) = self.lock() {
            inner.set_load_label(text);
        }
    }

    fn set_load_bar(&mut self, percent: f64) {
        if let Ok(mut inner) = self.lock() {
            inner.set_load_bar(percent);
        }
    }

    fn set_frame_label(&mut self, text: &str) {
        if let Ok(mut inner) = self.lock() {
            inner.set_frame_label(text);
        }
    }

    fn set_hud_fill(&mut self, percent: f64) {
        if let Ok(mut inner) = self.lock() {
            inner.set_hud_fill(percent);
        }
    }
}

/// Sink that only emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn set_load_label(&mut self, text: &str) {
        tracing::trace!(text, "load label");
    }

    fn set_load_bar(&mut self, percent: f64) {
        tracing::trace!(percent, "load bar");
    }

    fn set_frame_label(&mut self, text: &str) {
        tracing::trace!(text, "frame label");
    }

    fn set_hud_fill(&mut self, percent: f64) {
        tracing::trace!(percent, "hud fill");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/progress.rs"]
mod tests;
