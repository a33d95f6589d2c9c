use std::sync::Arc;

use crate::application::ports::VoiceModel;
use crate::domain::{ComputeDevice, ModelSettings, ModelSource, ModelSummary, Precision};

/// Immutable outcome of bootstrap, shared by every request handler.
pub struct ModelContext {
    model: Option<Arc<dyn VoiceModel>>,
    settings: Option<ModelSettings>,
    source: Option<ModelSource>,
    device: ComputeDevice,
    precision: Precision,
    load_error: Option<String>,
}

impl ModelContext {
    pub fn loaded(
        model: Arc<dyn VoiceModel>,
        settings: ModelSettings,
        source: ModelSource,
        device: ComputeDevice,
        precision: Precision,
    ) -> Self {
        Self {
            model: Some(model),
            settings: Some(settings),
            source: Some(source),
            device,
            precision,
            load_error: None,
        }
    }

    pub fn unloaded(
        reason: impl Into<String>,
        source: Option<ModelSource>,
        device: ComputeDevice,
        precision: Precision,
    ) -> Self {
        Self {
            model: None,
            settings: None,
            source,
            device,
            precision,
            load_error: Some(reason.into()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&Arc<dyn VoiceModel>> {
        self.model.as_ref()
    }

    pub fn settings(&self) -> Option<&ModelSettings> {
        self.settings.as_ref()
    }

    pub fn source(&self) -> Option<&ModelSource> {
        self.source.as_ref()
    }

    pub fn device(&self) -> ComputeDevice {
        self.device
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn summary(&self) -> Option<ModelSummary> {
        self.model.as_ref().map(|m| m.summary())
    }
}
