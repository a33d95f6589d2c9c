use std::fmt;

use serde::Serialize;

/// Compute target the model weights live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "ordinal")]
pub enum ComputeDevice {
    Cuda(usize),
    Metal,
    Cpu,
}

impl ComputeDevice {
    pub fn is_accelerator(&self) -> bool {
        !matches!(self, ComputeDevice::Cpu)
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeDevice::Cuda(ordinal) => write!(f, "cuda:{}", ordinal),
            ComputeDevice::Metal => f.write_str("metal"),
            ComputeDevice::Cpu => f.write_str("cpu"),
        }
    }
}
