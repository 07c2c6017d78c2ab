use crate::foundation::math::progress_between;

/// Scroll span over which a trigger reports progress `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Scroll offset at which progress is 0.
    pub start: f64,
    /// Scroll offset at which progress is 1.
    pub end: f64,
}

impl ScrollRegion {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Region for an element pinned from "top top" to "bottom bottom".
    ///
    /// Starts when the element's top meets the viewport top, ends when its bottom meets the
    /// viewport bottom.
    pub fn pinned(top: f64, height: f64, viewport_height: f64) -> Self {
        Self::new(top, top + (height - viewport_height).max(0.0))
    }

    /// Region from "top top" until `fraction` of the element has scrolled past the viewport top.
    pub fn leading_fraction(top: f64, height: f64, fraction: f64) -> Self {
        Self::new(top, top + height * fraction)
    }

    /// Progress for a scroll offset, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        progress_between(scroll_y, self.start, self.end)
    }
}

/// Catch-up smoothing applied between raw scroll progress and the scrubbed value.
///
/// After `lag` seconds roughly 95% of the gap to the target has closed. A zero lag snaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubFollower {
    lag: f64,
    value: f64,
    target: f64,
    emitted: Option<f64>,
}

/// Catch-up lag used by the intro scrub.
pub const DEFAULT_SCRUB_LAG: f64 = 0.5;

impl ScrubFollower {
    pub fn new(lag: f64) -> Self {
        Self {
            lag: lag.max(0.0),
            value: 0.0,
            target: 0.0,
            emitted: None,
        }
    }

    pub fn set_target(&mut self, progress: f64) {
        self.target = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if self.lag == 0.0 {
            self.value = self.target;
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Advance by `dt` seconds. Returns the value whenever it differs from the last one
    /// returned; the first call always reports.
    pub fn advance(&mut self, dt: f64) -> Option<f64> {
        if self.lag == 0.0 {
            self.value = self.target;
        } else if !self.is_settled() && dt.is_finite() && dt > 0.0 {
            let k = 1.0 - (-3.0 * dt / self.lag).exp();
            self.value += (self.target - self.value) * k;
            if (self.target - self.value).abs() < 1e-4 {
                self.value = self.target;
            }
        }
        if self.emitted == Some(self.value) {
            return None;
        }
        self.emitted = Some(self.value);
        Some(self.value)
    }
}

impl Default for ScrubFollower {
    fn default() -> Self {
        Self::new(DEFAULT_SCRUB_LAG)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scrub/region.rs"]
mod tests;
