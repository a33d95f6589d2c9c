use std::path::Path;

use candle_core::{DType, Device, Tensor};

use crate::application::ports::{ConversionError, VoiceModel};
use crate::domain::{ComputeDevice, ModelSummary, Precision};

use super::device::candle_device;
use super::pth_checkpoint::read_pth_checkpoint;

/// Checkpoint weights held as candle tensors.
pub struct CandleVoiceModel {
    weights: Vec<(String, Tensor)>,
    device: ComputeDevice,
    precision: Precision,
    eval_mode: bool,
}

impl CandleVoiceModel {
    pub fn new(weights: Vec<(String, Tensor)>) -> Self {
        let precision = if weights.iter().any(|(_, t)| t.dtype() == DType::F16) {
            Precision::Half
        } else {
            Precision::Full
        };

        Self {
            weights,
            device: ComputeDevice::Cpu,
            precision,
            eval_mode: false,
        }
    }

    /// Reads `.safetensors` files directly and anything else as a PyTorch pickle.
    pub fn from_checkpoint(path: &Path) -> Result<Self, ConversionError> {
        if !path.is_file() {
            return Err(ConversionError::ModelLoadFailed(format!(
                "checkpoint not found: {}",
                path.display()
            )));
        }

        let is_safetensors = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("safetensors"));

        let mut weights: Vec<(String, Tensor)> = if is_safetensors {
            candle_core::safetensors::load(path, &Device::Cpu)
                .map_err(|e| {
                    ConversionError::ModelLoadFailed(format!("{}: {}", path.display(), e))
                })?
                .into_iter()
                .collect()
        } else {
            read_pth_checkpoint(path)?
        };

        if weights.is_empty() {
            return Err(ConversionError::ModelLoadFailed(format!(
                "checkpoint contains no tensors: {}",
                path.display()
            )));
        }

        weights.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(
            path = %path.display(),
            tensors = weights.len(),
            "Checkpoint weights read"
        );

        Ok(Self::new(weights))
    }

    pub fn weights(&self) -> &[(String, Tensor)] {
        &self.weights
    }
}

impl VoiceModel for CandleVoiceModel {
    fn to_device(&mut self, device: ComputeDevice) -> Result<(), ConversionError> {
        if device == self.device {
            return Ok(());
        }

        let target = candle_device(device)?;
        for (name, tensor) in self.weights.iter_mut() {
            *tensor = tensor.to_device(&target).map_err(|e| {
                ConversionError::ModelLoadFailed(format!("moving {} to {}: {}", name, device, e))
            })?;
        }

        self.device = device;
        Ok(())
    }

    fn to_precision(&mut self, precision: Precision) -> Result<(), ConversionError> {
        let dtype = match precision {
            Precision::Half => DType::F16,
            Precision::Full => DType::F32,
        };

        // Integer buffers (step counters, index tables) keep their dtype.
        for (name, tensor) in self.weights.iter_mut() {
            if !tensor.dtype().is_float() || tensor.dtype() == dtype {
                continue;
            }
            *tensor = tensor.to_dtype(dtype).map_err(|e| {
                ConversionError::ModelLoadFailed(format!(
                    "casting {} to {}: {}",
                    name, precision, e
                ))
            })?;
        }

        self.precision = precision;
        Ok(())
    }

    fn eval(&mut self) {
        self.eval_mode = true;
    }

    fn summary(&self) -> ModelSummary {
        ModelSummary {
            tensor_count: self.weights.len(),
            parameter_count: self.weights.iter().map(|(_, t)| t.elem_count()).sum(),
            device: self.device,
            precision: self.precision,
            eval_mode: self.eval_mode,
        }
    }
}
