#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("settings file not found: {0}")]
    ConfigNotFound(String),
    #[error("settings file is malformed: {0}")]
    ConfigInvalid(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("model is not loaded: {0}")]
    ModelNotLoaded(String),
    #[error("missing input: {0}")]
    InputMissing(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("voice conversion is not implemented yet")]
    NotImplemented,
}

impl ConversionError {
    /// Stable machine-readable code for clients.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::ConfigNotFound(_) => "config_not_found",
            ConversionError::ConfigInvalid(_) => "config_invalid",
            ConversionError::ModelLoadFailed(_) => "model_load_failed",
            ConversionError::ModelNotLoaded(_) => "model_not_loaded",
            ConversionError::InputMissing(_) => "input_missing",
            ConversionError::InvalidInput(_) => "invalid_input",
            ConversionError::NotImplemented => "not_implemented",
        }
    }
}
