mod audio_inspector;
mod conversion_error;
mod model_loader;
mod voice_model;

pub use audio_inspector::AudioInspector;
pub use conversion_error::ConversionError;
pub use model_loader::{LoadedModel, ModelLoader};
pub use voice_model::VoiceModel;
