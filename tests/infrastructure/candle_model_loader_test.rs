use std::collections::HashMap;

use candle_core::{DType, Device, Tensor};

use voicebridge::application::ports::{ConversionError, ModelLoader};
use voicebridge::infrastructure::model::CandleModelLoader;

use crate::helpers::{SETTINGS_YAML, build_nested_pth};

fn write_checkpoint(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("model.safetensors");
    let mut tensors = HashMap::new();
    tensors.insert(
        "encoder.weight".to_string(),
        Tensor::ones((2, 2), DType::F32, &Device::Cpu).unwrap(),
    );
    candle_core::safetensors::save(&tensors, &path).unwrap();
    path
}

#[test]
fn given_local_checkpoint_and_config_when_loading_then_returns_model_with_settings() {
    let dir = tempfile::tempdir().unwrap();
    let checkpoint = write_checkpoint(dir.path());
    let config = dir.path().join("config.yml");
    std::fs::write(&config, SETTINGS_YAML).unwrap();

    let loaded = CandleModelLoader::new()
        .load_local(&checkpoint, &config)
        .unwrap();

    assert_eq!(loaded.settings.sampling_rate, 22_050);
    assert_eq!(loaded.model.summary().parameter_count, 4);
}

#[test]
fn given_missing_config_when_loading_locally_then_returns_config_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let checkpoint = write_checkpoint(dir.path());

    let result = CandleModelLoader::new().load_local(&checkpoint, &dir.path().join("none.yml"));

    assert!(matches!(result, Err(ConversionError::ConfigNotFound(_))));
}

#[test]
fn given_missing_checkpoint_when_loading_locally_then_returns_model_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.yml");
    std::fs::write(&config, SETTINGS_YAML).unwrap();

    let result = CandleModelLoader::new().load_local(&dir.path().join("none.pth"), &config);

    assert!(matches!(result, Err(ConversionError::ModelLoadFailed(_))));
}

#[test]
fn given_local_pth_checkpoint_with_nested_modules_when_loading_then_reads_every_tensor() {
    let dir = tempfile::tempdir().unwrap();
    let checkpoint = dir.path().join("DiT_seed_v2.pth");
    build_nested_pth(&checkpoint, true);
    let config = dir.path().join("config.yml");
    std::fs::write(&config, SETTINGS_YAML).unwrap();

    let loaded = CandleModelLoader::new()
        .load_local(&checkpoint, &config)
        .unwrap();

    assert_eq!(loaded.model.summary().tensor_count, 2);
    assert_eq!(loaded.model.summary().parameter_count, 7);
}
