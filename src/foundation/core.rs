use crate::foundation::error::{SeqError, SeqResult};

pub use kurbo::{Point, Vec2};

/// Pixel size of a drawing surface or of the host viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Build a viewport, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> SeqResult<Self> {
        if width == 0 || height == 0 {
            return Err(SeqError::validation("viewport dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Centre point of the viewport.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub(crate) fn pixel_len(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Clamp a fractional, 1-based frame position to `[1, frame_count]`.
///
/// NaN collapses to the first frame.
pub fn clamp_frame(frame: f64, frame_count: u32) -> f64 {
    let max = f64::from(frame_count.max(1));
    if frame.is_nan() {
        return 1.0;
    }
    frame.clamp(1.0, max)
}

/// Whole frame number (1-based) for a fractional frame position, clamped to `[1, frame_count]`.
pub fn whole_frame(frame: f64, frame_count: u32) -> u32 {
    clamp_frame(frame, frame_count).floor() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
