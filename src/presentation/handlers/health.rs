use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: &'static str,
    pub version: &'static str,
}

pub async fn health_handler<I, G>(State(state): State<AppState<I, G>>) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let mode = if state.scaffold_config.enabled {
        "scaffold"
    } else {
        "live"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            mode,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
