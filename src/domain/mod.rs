mod audio_clip;
mod compute_device;
mod conversion_params;
mod conversion_request;
mod model_settings;
mod model_source;
mod precision;
pub mod slider_range;

pub use audio_clip::{AudioClip, AudioMetadata};
pub use compute_device::ComputeDevice;
pub use conversion_params::ConversionParams;
pub use conversion_request::{ConversionOutcome, ConversionRequest, PlaceholderMode, TargetVoice};
pub use model_settings::{ModelSettings, ModelSummary};
pub use model_source::{
    DEFAULT_HUB_CHECKPOINT, DEFAULT_HUB_CONFIG, DEFAULT_HUB_REPO, ModelSource, RemoteArtifact,
};
pub use precision::Precision;
pub use slider_range::SliderRange;
