use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::api_types::{AskRequest, AskResponse};
use super::error::{parse_session_id, session_error_response};

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler<I, G>(
    State(state): State<AppState<I, G>>,
    Path(session_id): Path<String>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing question");

    match state.session_service.ask(id, &request.question).await {
        Ok(turn) => {
            tracing::info!(remaining = turn.remaining_questions, "Question answered");
            (StatusCode::OK, Json(AskResponse::from(turn))).into_response()
        }
        Err(e) => session_error_response(&e),
    }
}
