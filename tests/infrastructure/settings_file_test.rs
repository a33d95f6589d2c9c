use voicebridge::application::ports::ConversionError;
use voicebridge::infrastructure::model::{load_model_settings, parse_model_settings};

use crate::helpers::SETTINGS_YAML;

#[test]
fn given_seed_vc_style_yaml_when_parsing_then_extracts_preprocess_params() {
    let settings = parse_model_settings(SETTINGS_YAML).unwrap();

    assert_eq!(settings.sampling_rate, 22_050);
    assert_eq!(settings.n_fft, 1024);
    assert_eq!(settings.hop_length, 256);
    assert_eq!(settings.n_mels, 80);
    assert!(settings.model_sections.contains(&"DiT".to_string()));
    assert!(settings.model_sections.contains(&"length_regulator".to_string()));
}

#[test]
fn given_missing_file_when_loading_then_returns_config_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_model_settings(&dir.path().join("absent.yml"));

    assert!(matches!(result, Err(ConversionError::ConfigNotFound(_))));
}

#[test]
fn given_yaml_without_preprocess_params_when_loading_then_returns_config_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    std::fs::write(&path, "model_params:\n  DiT: {}\n").unwrap();

    let result = load_model_settings(&path);

    assert!(matches!(result, Err(ConversionError::ConfigInvalid(_))));
}

#[test]
fn given_valid_file_when_loading_then_returns_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    std::fs::write(&path, SETTINGS_YAML).unwrap();

    let settings = load_model_settings(&path).unwrap();

    assert_eq!(settings.win_length, 1024);
}
