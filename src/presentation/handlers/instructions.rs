use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::application::services::SessionError;
use crate::domain::{InstructionError, InstructionToggle};
use crate::presentation::state::AppState;

use super::api_types::{InstructionCatalogResponse, SelectInstructionsRequest, SessionResponse};
use super::error::{parse_session_id, session_error_response};

pub async fn instruction_catalog_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(InstructionCatalogResponse::all()))
}

#[tracing::instrument(skip(state, request), fields(count = request.instructions.len()))]
pub async fn select_instructions_handler<I, G>(
    State(state): State<AppState<I, G>>,
    Path(session_id): Path<String>,
    Json(request): Json<SelectInstructionsRequest>,
) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let toggles = match request
        .instructions
        .iter()
        .map(|raw| {
            raw.parse::<InstructionToggle>()
                .map_err(|_| InstructionError::Unknown(raw.clone()))
        })
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(toggles) => toggles,
        Err(e) => return session_error_response(&SessionError::Instructions(e)),
    };

    match state.session_service.select_instructions(id, toggles).await {
        Ok(snapshot) => (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response(),
        Err(e) => session_error_response(&e),
    }
}
