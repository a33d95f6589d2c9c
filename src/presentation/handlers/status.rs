use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{ComputeDevice, ModelSettings, ModelSource, ModelSummary, Precision};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub loaded: bool,
    pub device: ComputeDevice,
    pub precision: Precision,
    pub source: Option<ModelSource>,
    pub error: Option<String>,
    pub settings: Option<ModelSettings>,
    pub summary: Option<ModelSummary>,
    pub placeholder: &'static str,
    pub share_requested: bool,
}

pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let context = &state.context;

    (
        StatusCode::OK,
        Json(StatusResponse {
            loaded: context.is_loaded(),
            device: context.device(),
            precision: context.precision(),
            source: context.source().cloned(),
            error: context.load_error().map(String::from),
            settings: context.settings().cloned(),
            summary: context.summary(),
            placeholder: state.conversion_service.placeholder().as_str(),
            share_requested: state.share_requested,
        }),
    )
}
