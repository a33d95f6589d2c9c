use std::path::Path;

use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};

use crate::application::ports::{ConversionError, LoadedModel, ModelLoader};
use crate::domain::RemoteArtifact;

use super::candle_voice_model::CandleVoiceModel;
use super::settings_file::load_model_settings;

/// Loads checkpoints from disk, fetching them through the hub cache when remote.
#[derive(Debug, Default, Clone, Copy)]
pub struct CandleModelLoader;

impl CandleModelLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ModelLoader for CandleModelLoader {
    fn load_local(&self, checkpoint: &Path, config: &Path) -> Result<LoadedModel, ConversionError> {
        tracing::info!(
            checkpoint = %checkpoint.display(),
            config = %config.display(),
            "Loading model from local files"
        );

        let settings = load_model_settings(config)?;
        let model = CandleVoiceModel::from_checkpoint(checkpoint)?;

        Ok(LoadedModel {
            model: Box::new(model),
            settings,
        })
    }

    fn load_remote(&self, artifact: &RemoteArtifact) -> Result<LoadedModel, ConversionError> {
        tracing::info!(
            repo = %artifact.repo_id,
            checkpoint = %artifact.checkpoint_file,
            config = %artifact.config_file,
            "Fetching pretrained model from hub"
        );

        let api = Api::new().map_err(|e| ConversionError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(artifact.repo_id.clone(), RepoType::Model));

        let config_path = repo.get(&artifact.config_file).map_err(|e| {
            ConversionError::ConfigNotFound(format!("{}: {}", artifact.config_file, e))
        })?;
        let checkpoint_path = repo.get(&artifact.checkpoint_file).map_err(|e| {
            ConversionError::ModelLoadFailed(format!("{}: {}", artifact.checkpoint_file, e))
        })?;

        self.load_local(&checkpoint_path, &config_path)
    }
}
