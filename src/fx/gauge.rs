/// Engine idle speed; the gauge rests here.
pub const IDLE_RPM: f64 = 900.0;
/// Full-scale reading.
pub const MAX_RPM: f64 = 9000.0;
/// Readings above this light the redline.
pub const REDLINE_RPM: f64 = 7500.0;

const VELOCITY_GAIN: f64 = 150.0;
const TARGET_DECAY: f64 = 0.08;
const FOLLOW: f64 = 0.15;

/// One frame's gauge display.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GaugeReading {
    pub rpm: f64,
    /// Counter text, e.g. `"0900 RPM"`.
    pub label: String,
    /// Fill bar width in percent of [`MAX_RPM`].
    pub fill_percent: f64,
    pub redline: bool,
}

/// Tachometer driven by scroll velocity.
///
/// Scroll events raise the target; every tick the target decays back to idle and the needle
/// eases towards the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RpmGauge {
    current: f64,
    target: f64,
}

impl Default for RpmGauge {
    fn default() -> Self {
        Self {
            current: IDLE_RPM,
            target: IDLE_RPM,
        }
    }
}

impl RpmGauge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Rev the engine for a scroll velocity (sign ignored).
    pub fn on_scroll_velocity(&mut self, velocity: f64) {
        let v = if velocity.is_finite() { velocity.abs() } else { 0.0 };
        self.target = IDLE_RPM + (v * VELOCITY_GAIN).min(MAX_RPM - IDLE_RPM);
    }

    /// Per-frame physics step.
    pub fn tick(&mut self) -> GaugeReading {
        self.target -= (self.target - IDLE_RPM) * TARGET_DECAY;
        self.current += (self.target - self.current) * FOLLOW;
        self.reading()
    }

    pub fn reading(&self) -> GaugeReading {
        GaugeReading {
            rpm: self.current,
            label: format!("{:04} RPM", self.current.floor() as u32),
            fill_percent: self.current / MAX_RPM * 100.0,
            redline: self.current > REDLINE_RPM,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/gauge.rs"]
mod tests;
