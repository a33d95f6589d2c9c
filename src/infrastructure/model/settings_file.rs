use std::path::Path;

use serde::Deserialize;

use crate::application::ports::ConversionError;
use crate::domain::ModelSettings;

#[derive(Debug, Deserialize)]
struct SettingsFile {
    preprocess_params: PreprocessParams,
    #[serde(default)]
    model_params: serde_yaml::Mapping,
}

#[derive(Debug, Deserialize)]
struct PreprocessParams {
    sr: u32,
    spect_params: SpectParams,
}

#[derive(Debug, Deserialize)]
struct SpectParams {
    n_fft: u32,
    win_length: u32,
    hop_length: u32,
    n_mels: u32,
}

pub fn load_model_settings(path: &Path) -> Result<ModelSettings, ConversionError> {
    if !path.is_file() {
        return Err(ConversionError::ConfigNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConversionError::ConfigNotFound(format!("{}: {}", path.display(), e)))?;

    let settings = parse_model_settings(&contents)
        .map_err(|e| ConversionError::ConfigInvalid(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        path = %path.display(),
        sampling_rate = settings.sampling_rate,
        sections = settings.model_sections.len(),
        "Model settings parsed"
    );

    Ok(settings)
}

pub fn parse_model_settings(contents: &str) -> Result<ModelSettings, serde_yaml::Error> {
    let file: SettingsFile = serde_yaml::from_str(contents)?;

    let model_sections = file
        .model_params
        .keys()
        .filter_map(|k| k.as_str().map(String::from))
        .collect();

    Ok(ModelSettings {
        sampling_rate: file.preprocess_params.sr,
        n_fft: file.preprocess_params.spect_params.n_fft,
        win_length: file.preprocess_params.spect_params.win_length,
        hop_length: file.preprocess_params.spect_params.hop_length,
        n_mels: file.preprocess_params.spect_params.n_mels,
        model_sections,
    })
}
