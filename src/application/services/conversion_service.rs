use std::sync::Arc;

use crate::application::ports::{AudioInspector, ConversionError};
use crate::domain::{ConversionOutcome, ConversionRequest, PlaceholderMode, TargetVoice};

use super::model_context::ModelContext;

pub struct ConversionService {
    context: Arc<ModelContext>,
    inspector: Arc<dyn AudioInspector>,
    placeholder: PlaceholderMode,
}

impl ConversionService {
    pub fn new(
        context: Arc<ModelContext>,
        inspector: Arc<dyn AudioInspector>,
        placeholder: PlaceholderMode,
    ) -> Self {
        Self {
            context,
            inspector,
            placeholder,
        }
    }

    pub fn placeholder(&self) -> PlaceholderMode {
        self.placeholder
    }

    #[tracing::instrument(
        skip(self, request),
        fields(target_voice = %request.target.describe())
    )]
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionOutcome, ConversionError> {
        if !self.context.is_loaded() {
            let reason = self
                .context
                .load_error()
                .unwrap_or("bootstrap did not complete")
                .to_string();
            tracing::warn!(reason = %reason, "Conversion requested without a loaded model");
            return Err(ConversionError::ModelNotLoaded(reason));
        }

        let source = match request.source {
            Some(clip) if !clip.is_empty() => clip,
            _ => {
                return Err(ConversionError::InputMissing(
                    "source audio is required".to_string(),
                ));
            }
        };

        let source_metadata = self
            .inspector
            .inspect(source.data.clone())
            .await
            .map_err(|e| label_audio_error("source audio", e))?;

        if let TargetVoice::Reference(reference) = &request.target {
            self.inspector
                .inspect(reference.data.clone())
                .await
                .map_err(|e| label_audio_error("target audio", e))?;
        }

        tracing::debug!(
            filename = %source.filename,
            bytes = source.size_bytes(),
            duration_secs = source_metadata.duration_secs(),
            diffusion_steps = request.params.diffusion_steps,
            length_adjust = request.params.length_adjust,
            inference_cfg_rate = request.params.inference_cfg_rate,
            pitch_shift = request.params.pitch_shift,
            "Conversion request accepted"
        );

        match self.placeholder {
            PlaceholderMode::Echo => {
                let status = format!(
                    "Voice conversion is not implemented yet; returned the {:.2}s source clip unchanged.",
                    source_metadata.duration_secs()
                );
                tracing::info!(filename = %source.filename, "Echoing source audio");
                Ok(ConversionOutcome {
                    audio: Some(source),
                    status,
                    source_metadata: Some(source_metadata),
                    params: request.params,
                })
            }
            PlaceholderMode::NotImplemented => Err(ConversionError::NotImplemented),
        }
    }
}

fn label_audio_error(field: &str, error: ConversionError) -> ConversionError {
    match error {
        ConversionError::InvalidInput(msg) => {
            ConversionError::InvalidInput(format!("{}: {}", field, msg))
        }
        other => other,
    }
}
