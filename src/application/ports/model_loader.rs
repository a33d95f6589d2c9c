use std::path::Path;

use crate::domain::{ModelSettings, RemoteArtifact};

use super::{ConversionError, VoiceModel};

pub struct LoadedModel {
    pub model: Box<dyn VoiceModel>,
    pub settings: ModelSettings,
}

/// Resolves a model and its settings. Implementations may block on disk or network IO.
pub trait ModelLoader: Send + Sync {
    fn load_local(&self, checkpoint: &Path, config: &Path) -> Result<LoadedModel, ConversionError>;

    fn load_remote(&self, artifact: &RemoteArtifact) -> Result<LoadedModel, ConversionError>;
}
