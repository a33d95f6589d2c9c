use crate::domain::{ComputeDevice, ModelSummary, Precision};

use super::ConversionError;

/// A loaded inference object. Mutated only while bootstrapping, read-only after.
pub trait VoiceModel: Send + Sync {
    fn to_device(&mut self, device: ComputeDevice) -> Result<(), ConversionError>;

    fn to_precision(&mut self, precision: Precision) -> Result<(), ConversionError>;

    /// Switches to inference-only mode.
    fn eval(&mut self);

    fn summary(&self) -> ModelSummary;
}
