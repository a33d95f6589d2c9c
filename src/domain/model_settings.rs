use serde::Serialize;

/// Preprocessing parameters read from the model's settings file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSettings {
    pub sampling_rate: u32,
    pub n_fft: u32,
    pub win_length: u32,
    pub hop_length: u32,
    pub n_mels: u32,
    /// Top-level sections under `model_params`, e.g. `DiT` or `length_regulator`.
    pub model_sections: Vec<String>,
}

/// What a loaded model reports about itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub tensor_count: usize,
    pub parameter_count: usize,
    pub device: super::ComputeDevice,
    pub precision: super::Precision,
    pub eval_mode: bool,
}
