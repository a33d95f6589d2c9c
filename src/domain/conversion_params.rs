use serde::Serialize;

use super::slider_range::{DIFFUSION_STEPS, INFERENCE_CFG_RATE, LENGTH_ADJUST, PITCH_SHIFT};

/// Numeric knobs submitted alongside a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionParams {
    pub diffusion_steps: u32,
    pub length_adjust: f32,
    pub inference_cfg_rate: f32,
    /// Semitones.
    pub pitch_shift: i32,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            diffusion_steps: DIFFUSION_STEPS.default as u32,
            length_adjust: LENGTH_ADJUST.default as f32,
            inference_cfg_rate: INFERENCE_CFG_RATE.default as f32,
            pitch_shift: PITCH_SHIFT.default as i32,
        }
    }
}

impl ConversionParams {
    /// Builds params from raw slider values. Missing values take the slider
    /// default, out-of-range values are clamped and in-range values pass
    /// through unchanged. Integer sliders round to the nearest whole step;
    /// the HTTP form rejects fractional values for them before this point.
    pub fn from_sliders(
        diffusion_steps: Option<f64>,
        length_adjust: Option<f64>,
        inference_cfg_rate: Option<f64>,
        pitch_shift: Option<f64>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            diffusion_steps: diffusion_steps
                .map(|v| DIFFUSION_STEPS.clamp(v).round() as u32)
                .unwrap_or(defaults.diffusion_steps),
            length_adjust: length_adjust
                .map(|v| LENGTH_ADJUST.clamp(v) as f32)
                .unwrap_or(defaults.length_adjust),
            inference_cfg_rate: inference_cfg_rate
                .map(|v| INFERENCE_CFG_RATE.clamp(v) as f32)
                .unwrap_or(defaults.inference_cfg_rate),
            pitch_shift: pitch_shift
                .map(|v| PITCH_SHIFT.clamp(v).round() as i32)
                .unwrap_or(defaults.pitch_shift),
        }
    }
}
