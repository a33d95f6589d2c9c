use serde::Serialize;

/// Declared bounds of a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when every position on the slider is a whole number.
    pub fn is_integral(&self) -> bool {
        self.step.fract() == 0.0 && self.min.fract() == 0.0
    }

    /// Pins `value` into the range. NaN falls back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

pub const DIFFUSION_STEPS: SliderRange = SliderRange::new(4.0, 50.0, 1.0, 10.0);
pub const LENGTH_ADJUST: SliderRange = SliderRange::new(0.5, 2.0, 0.1, 1.0);
pub const INFERENCE_CFG_RATE: SliderRange = SliderRange::new(0.0, 1.0, 0.1, 0.7);
pub const PITCH_SHIFT: SliderRange = SliderRange::new(-12.0, 12.0, 1.0, 0.0);
