use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::presentation::interface::render_page;
use crate::presentation::state::AppState;

pub async fn interface_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_page(&state.interface))
}

pub async fn interface_schema_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.interface.as_ref().clone())
}
