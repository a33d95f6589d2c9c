use candle_core::Device;

use crate::application::ports::ConversionError;
use crate::domain::ComputeDevice;

/// Picks the first available accelerator, falling back to the CPU.
pub fn select_compute_device() -> ComputeDevice {
    let device = if candle_core::utils::cuda_is_available() {
        ComputeDevice::Cuda(0)
    } else if candle_core::utils::metal_is_available() {
        ComputeDevice::Metal
    } else {
        ComputeDevice::Cpu
    };

    tracing::info!(device = %device, "Selected compute device");
    device
}

pub fn candle_device(device: ComputeDevice) -> Result<Device, ConversionError> {
    match device {
        ComputeDevice::Cpu => Ok(Device::Cpu),
        ComputeDevice::Cuda(ordinal) => Device::new_cuda(ordinal)
            .map_err(|e| ConversionError::ModelLoadFailed(format!("cuda:{}: {}", ordinal, e))),
        ComputeDevice::Metal => Device::new_metal(0)
            .map_err(|e| ConversionError::ModelLoadFailed(format!("metal: {}", e))),
    }
}
