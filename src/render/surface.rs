use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::{
        core::Viewport,
        error::{SeqError, SeqResult},
    },
    render::composite::{PremulRgba8, unpremultiply},
};

const CLEAR: PremulRgba8 = [0, 0, 0, 255];

/// Opaque drawing surface sized to the viewport, premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct Surface {
    viewport: Viewport,
    data: Vec<u8>,
}

impl Surface {
    /// Surface cleared to opaque black.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            data: cleared(viewport),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let i = ((y as usize) * (self.viewport.width as usize) + (x as usize)) * 4;
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Reset dimensions. Like a canvas, any resize (even to the same size) clears the pixels.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.data = cleared(viewport);
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Write the surface as a PNG, creating parent directories.
    pub fn write_png(&self, path: &Path) -> SeqResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.viewport.width,
            self.viewport.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| SeqError::render(format!("write png '{}': {e}", path.display())))
    }
}

fn cleared(viewport: Viewport) -> Vec<u8> {
    CLEAR.repeat(viewport.pixel_len())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
