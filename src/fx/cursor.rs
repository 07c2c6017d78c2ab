use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::Point,
};

const HOVER_DURATION: f64 = 0.3;
const HOVER_LINE_SCALE: f64 = 1.5;
const HOVER_LINE_OPACITY: f64 = 0.3;
const HOVER_DOT_SCALE: f64 = 3.0;

/// Dot colour while hovering an interactive element, straight RGBA8.
pub const HOVER_DOT_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Dot colour at rest (page accent), straight RGBA8.
pub const ACCENT_DOT_COLOR: [u8; 4] = [255, 59, 48, 255];

/// Pose of the crosshair for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPose {
    pub position: Point,
    pub line_scale: f64,
    pub line_opacity: f64,
    pub dot_scale: f64,
    pub dot_color: [u8; 4],
}

/// Crosshair cursor: two lines and a dot pinned to the pointer, enlarged over interactive
/// elements.
#[derive(Clone, Copy, Debug)]
pub struct CursorFollower {
    pointer: Point,
    hovering: bool,
    line_scale: Tween,
    line_opacity: Tween,
    dot_scale: Tween,
}

impl CursorFollower {
    /// Cursor parked at `start` (the viewport centre on page load).
    pub fn new(start: Point) -> Self {
        Self {
            pointer: start,
            hovering: false,
            line_scale: Tween::settled(1.0),
            line_opacity: Tween::settled(1.0),
            dot_scale: Tween::settled(1.0),
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Pointer entered (`true`) or left (`false`) an interactive element.
    pub fn set_hover(&mut self, hovering: bool) {
        if self.hovering == hovering {
            return;
        }
        self.hovering = hovering;
        let (line_scale, line_opacity, dot_scale) = if hovering {
            (HOVER_LINE_SCALE, HOVER_LINE_OPACITY, HOVER_DOT_SCALE)
        } else {
            (1.0, 1.0, 1.0)
        };
        self.line_scale
            .retarget(line_scale, HOVER_DURATION, Ease::OutQuad);
        self.line_opacity
            .retarget(line_opacity, HOVER_DURATION, Ease::OutQuad);
        self.dot_scale
            .retarget(dot_scale, HOVER_DURATION, Ease::OutQuad);
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Per-frame update; the crosshair snaps to the latest pointer position.
    pub fn tick(&mut self, dt: f64) -> CursorPose {
        self.line_scale.advance(dt);
        self.line_opacity.advance(dt);
        self.dot_scale.advance(dt);
        self.pose()
    }

    pub fn pose(&self) -> CursorPose {
        CursorPose {
            position: self.pointer,
            line_scale: self.line_scale.value(),
            line_opacity: self.line_opacity.value(),
            dot_scale: self.dot_scale.value(),
            dot_color: if self.hovering {
                HOVER_DOT_COLOR
            } else {
                ACCENT_DOT_COLOR
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/cursor.rs"]
mod tests;
