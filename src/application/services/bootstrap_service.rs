use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ConversionError, LoadedModel, ModelLoader, VoiceModel};
use crate::domain::{ComputeDevice, ModelSource, Precision, RemoteArtifact};

use super::model_context::ModelContext;

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    pub checkpoint: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub remote: RemoteArtifact,
    pub device: ComputeDevice,
    pub precision: Precision,
}

pub struct ModelBootstrapper<L>
where
    L: ModelLoader + ?Sized,
{
    loader: Arc<L>,
}

impl<L> ModelBootstrapper<L>
where
    L: ModelLoader + ?Sized,
{
    pub fn new(loader: Arc<L>) -> Self {
        Self { loader }
    }

    /// Loads and prepares the model. Failures are logged and produce a context
    /// without a model so the interface can still be served.
    #[tracing::instrument(
        skip(self, options),
        fields(device = %options.device, precision = %options.precision)
    )]
    pub fn bootstrap(&self, options: &BootstrapOptions) -> ModelContext {
        let source = match resolve_model_source(options) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Invalid model configuration");
                return ModelContext::unloaded(
                    e.to_string(),
                    None,
                    options.device,
                    options.precision,
                );
            }
        };

        tracing::info!(source = %source, "Loading voice conversion model");

        match self.load_and_prepare(&source, options) {
            Ok(loaded) => {
                let model: Arc<dyn VoiceModel> = Arc::from(loaded.model);
                let summary = model.summary();
                tracing::info!(
                    tensors = summary.tensor_count,
                    parameters = summary.parameter_count,
                    sampling_rate = loaded.settings.sampling_rate,
                    "Voice conversion model ready"
                );
                ModelContext::loaded(
                    model,
                    loaded.settings,
                    source,
                    options.device,
                    options.precision,
                )
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    source = %source,
                    "Model bootstrap failed; serving without a model"
                );
                ModelContext::unloaded(
                    e.to_string(),
                    Some(source),
                    options.device,
                    options.precision,
                )
            }
        }
    }

    fn load_and_prepare(
        &self,
        source: &ModelSource,
        options: &BootstrapOptions,
    ) -> Result<LoadedModel, ConversionError> {
        let mut loaded = match source {
            ModelSource::Local { checkpoint, config } => {
                self.loader.load_local(checkpoint, config)?
            }
            ModelSource::Remote(artifact) => self.loader.load_remote(artifact)?,
        };

        loaded.model.to_device(options.device)?;
        if options.precision == Precision::Half {
            loaded.model.to_precision(Precision::Half)?;
        }
        loaded.model.eval();

        Ok(loaded)
    }
}

/// Chooses between the local pair and the remote default. A half-specified
/// local pair is rejected rather than guessed at.
pub fn resolve_model_source(options: &BootstrapOptions) -> Result<ModelSource, ConversionError> {
    let checkpoint = non_empty(options.checkpoint.as_ref());
    let config = non_empty(options.config.as_ref());

    match (checkpoint, config) {
        (None, None) => Ok(ModelSource::Remote(options.remote.clone())),
        (Some(checkpoint), Some(config)) => Ok(ModelSource::Local {
            checkpoint: checkpoint.clone(),
            config: config.clone(),
        }),
        (Some(checkpoint), None) => Err(ConversionError::ConfigNotFound(format!(
            "--config is required alongside --checkpoint {}",
            checkpoint.display()
        ))),
        (None, Some(config)) => Err(ConversionError::ModelLoadFailed(format!(
            "--checkpoint is required alongside --config {}",
            config.display()
        ))),
    }
}

fn non_empty(path: Option<&PathBuf>) -> Option<&PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
