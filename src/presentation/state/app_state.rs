use std::sync::Arc;

use crate::application::services::{ConversionService, ModelContext};
use crate::presentation::interface::Interface;

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<ModelContext>,
    pub conversion_service: Arc<ConversionService>,
    pub interface: Arc<Interface>,
    pub share_requested: bool,
}
