use std::collections::HashMap;

use candle_core::{DType, Device, Tensor};

use voicebridge::application::ports::{ConversionError, VoiceModel};
use voicebridge::domain::{ComputeDevice, Precision};
use voicebridge::infrastructure::model::CandleVoiceModel;

use crate::helpers::build_nested_pth;

fn sample_weights() -> Vec<(String, Tensor)> {
    vec![
        (
            "decoder.weight".to_string(),
            Tensor::zeros((4, 3), DType::F32, &Device::Cpu).unwrap(),
        ),
        (
            "decoder.steps".to_string(),
            Tensor::new(&[1u32, 2, 3], &Device::Cpu).unwrap(),
        ),
    ]
}

#[test]
fn given_fresh_model_when_summarised_then_reports_cpu_full_precision_not_eval() {
    let model = CandleVoiceModel::new(sample_weights());

    let summary = model.summary();

    assert_eq!(summary.tensor_count, 2);
    assert_eq!(summary.parameter_count, 15);
    assert_eq!(summary.device, ComputeDevice::Cpu);
    assert_eq!(summary.precision, Precision::Full);
    assert!(!summary.eval_mode);
}

#[test]
fn given_half_precision_when_casting_then_only_float_tensors_change_dtype() {
    let mut model = CandleVoiceModel::new(sample_weights());

    model.to_precision(Precision::Half).unwrap();

    let dtypes: HashMap<&str, DType> = model
        .weights()
        .iter()
        .map(|(name, t)| (name.as_str(), t.dtype()))
        .collect();
    assert_eq!(dtypes["decoder.weight"], DType::F16);
    assert_eq!(dtypes["decoder.steps"], DType::U32);
    assert_eq!(model.summary().precision, Precision::Half);
}

#[test]
fn given_model_when_eval_called_then_summary_reports_eval_mode() {
    let mut model = CandleVoiceModel::new(sample_weights());

    model.to_device(ComputeDevice::Cpu).unwrap();
    model.eval();

    assert!(model.summary().eval_mode);
}

#[test]
fn given_safetensors_checkpoint_when_loading_then_reads_sorted_weights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.safetensors");
    let tensors: HashMap<String, Tensor> = sample_weights().into_iter().collect();
    candle_core::safetensors::save(&tensors, &path).unwrap();

    let model = CandleVoiceModel::from_checkpoint(&path).unwrap();

    let names: Vec<&str> = model.weights().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["decoder.steps", "decoder.weight"]);
}

#[test]
fn given_missing_checkpoint_when_loading_then_returns_model_load_failed() {
    let dir = tempfile::tempdir().unwrap();

    let result = CandleVoiceModel::from_checkpoint(&dir.path().join("missing.pth"));

    assert!(matches!(result, Err(ConversionError::ModelLoadFailed(_))));
}

#[test]
fn given_corrupt_checkpoint_when_loading_then_returns_model_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.safetensors");
    std::fs::write(&path, b"not a safetensors file").unwrap();

    let result = CandleVoiceModel::from_checkpoint(&path);

    assert!(matches!(result, Err(ConversionError::ModelLoadFailed(_))));
}

#[test]
fn given_pth_with_nested_module_dicts_under_net_when_loading_then_flattens_dotted_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pth");
    build_nested_pth(&path, true);

    let model = CandleVoiceModel::from_checkpoint(&path).unwrap();

    let names: Vec<&str> = model.weights().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["cfm.estimator.proj.weight", "length_regulator.embedding.weight"]
    );
    let weights: HashMap<&str, &Tensor> =
        model.weights().iter().map(|(n, t)| (n.as_str(), t)).collect();
    assert_eq!(
        weights["cfm.estimator.proj.weight"].to_vec2::<f32>().unwrap(),
        vec![vec![1.0, 2.0], vec![3.0, 4.0]]
    );
    assert_eq!(
        weights["length_regulator.embedding.weight"]
            .to_vec1::<f32>()
            .unwrap(),
        vec![5.0, 6.0, 7.0]
    );
    assert_eq!(model.summary().parameter_count, 7);
}

#[test]
fn given_pth_without_net_key_when_loading_then_reads_whole_state_dict() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pth");
    build_nested_pth(&path, false);

    let model = CandleVoiceModel::from_checkpoint(&path).unwrap();

    assert_eq!(model.summary().tensor_count, 2);
}

#[test]
fn given_pth_that_is_not_a_zip_when_loading_then_returns_model_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.pth");
    std::fs::write(&path, b"not a torch archive").unwrap();

    let result = CandleVoiceModel::from_checkpoint(&path);

    assert!(matches!(result, Err(ConversionError::ModelLoadFailed(_))));
}
