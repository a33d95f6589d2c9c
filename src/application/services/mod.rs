mod bootstrap_service;
mod conversion_service;
mod model_context;

pub use bootstrap_service::{BootstrapOptions, ModelBootstrapper, resolve_model_source};
pub use conversion_service::ConversionService;
pub use model_context::ModelContext;
