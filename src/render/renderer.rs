use rayon::prelude::*;

use crate::{
    foundation::core::whole_frame,
    render::{composite::over, cover::CoverFit, surface::Surface},
    sequence::frames::FrameStore,
};

/// Result of one render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// Frame `index` was drawn with the given placement.
    Painted {
        /// 1-based frame index.
        index: u32,
        /// Cover placement used.
        fit: CoverFit,
    },
    /// Frame `index` is not loaded (or has no size); the surface was left untouched.
    Skipped {
        /// 1-based frame index.
        index: u32,
    },
}

impl RenderOutcome {
    pub fn index(&self) -> u32 {
        match *self {
            Self::Painted { index, .. } | Self::Skipped { index } => index,
        }
    }

    pub fn painted(&self) -> bool {
        matches!(self, Self::Painted { .. })
    }
}

/// Paints the frame under a fractional playhead into a surface using cover fit.
///
/// Stateless; every call re-samples the already decoded image.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw frame `floor(current_frame)` (clamped to `[1, N]`).
    ///
    /// Unloaded frames are skipped, never an error.
    pub fn render(
        &self,
        store: &FrameStore,
        current_frame: f64,
        surface: &mut Surface,
    ) -> RenderOutcome {
        let index = whole_frame(current_frame, store.frame_count());
        let Some(image) = store.get(index) else {
            return RenderOutcome::Skipped { index };
        };
        let (sw, sh) = (surface.width(), surface.height());
        if sw == 0 || sh == 0 {
            return RenderOutcome::Skipped { index };
        }
        let Some(fit) = CoverFit::compute(sw, sh, image.width, image.height) else {
            return RenderOutcome::Skipped { index };
        };

        let row_bytes = (sw as usize) * 4;
        surface
            .data_mut()
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let (ix, iy) =
                        fit.source_pixel(x as u32, y as u32, image.width, image.height);
                    let out = over([px[0], px[1], px[2], px[3]], image.pixel(ix, iy));
                    px.copy_from_slice(&out);
                }
            });

        RenderOutcome::Painted { index, fit }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
