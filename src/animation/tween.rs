use crate::{animation::ease::Ease, foundation::math::lerp};

/// Time-based interpolation of one scalar from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    ease: Ease,
    elapsed: f64,
}

impl Tween {
    /// Tween of `duration` seconds. Non-positive durations finish immediately.
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            elapsed: 0.0,
        }
    }

    /// A finished tween resting at `value`.
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0, Ease::Linear)
    }

    /// Start a new tween from the current value towards `to`.
    pub fn retarget(&mut self, to: f64, duration: f64, ease: Ease) {
        *self = Self::new(self.value(), to, duration, ease);
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(self.elapsed / self.duration))
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
