/// Placement of an image scaled to cover a surface.
///
/// The image keeps its aspect ratio, fills the surface completely and is centred; overflow on
/// one axis is cropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    /// Uniform scale factor applied to the image.
    pub scale: f64,
    /// Left edge of the scaled image in surface coordinates (`<= 0`).
    pub offset_x: f64,
    /// Top edge of the scaled image in surface coordinates (`<= 0`).
    pub offset_y: f64,
    pub draw_width: f64,
    pub draw_height: f64,
}

impl CoverFit {
    /// Cover placement of a `img_w x img_h` image on a `surface_w x surface_h` surface.
    ///
    /// Returns `None` for zero-sized images, which have no natural size yet.
    pub fn compute(surface_w: u32, surface_h: u32, img_w: u32, img_h: u32) -> Option<Self> {
        if img_w == 0 || img_h == 0 {
            return None;
        }
        let (sw, sh) = (f64::from(surface_w), f64::from(surface_h));
        let (iw, ih) = (f64::from(img_w), f64::from(img_h));

        let scale = (sw / iw).max(sh / ih);
        let draw_width = iw * scale;
        let draw_height = ih * scale;
        Some(Self {
            scale,
            offset_x: sw / 2.0 - draw_width / 2.0,
            offset_y: sh / 2.0 - draw_height / 2.0,
            draw_width,
            draw_height,
        })
    }

    /// Whether the placed image spans `[0, w] x [0, h]`.
    pub fn covers(&self, surface_w: u32, surface_h: u32) -> bool {
        const EPS: f64 = 1e-9;
        self.offset_x <= EPS
            && self.offset_y <= EPS
            && self.offset_x + self.draw_width >= f64::from(surface_w) - EPS
            && self.offset_y + self.draw_height >= f64::from(surface_h) - EPS
    }

    /// Image-space pixel sampled for the surface pixel at `(x, y)`, nearest neighbour.
    pub(crate) fn source_pixel(&self, x: u32, y: u32, img_w: u32, img_h: u32) -> (u32, u32) {
        let sx = ((f64::from(x) + 0.5 - self.offset_x) / self.scale).floor();
        let sy = ((f64::from(y) + 0.5 - self.offset_y) / self.scale).floor();
        let sx = sx.clamp(0.0, f64::from(img_w - 1)) as u32;
        let sy = sy.clamp(0.0, f64::from(img_h - 1)) as u32;
        (sx, sy)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cover.rs"]
mod tests;
