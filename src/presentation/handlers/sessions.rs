use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::presentation::state::AppState;

use super::api_types::SessionResponse;
use super::error::{parse_session_id, session_error_response};

#[tracing::instrument(skip(state))]
pub async fn create_session_handler<I, G>(State(state): State<AppState<I, G>>) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    match state.session_service.create_session().await {
        Ok(snapshot) => {
            (StatusCode::CREATED, Json(SessionResponse::from(snapshot))).into_response()
        }
        Err(e) => session_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_session_handler<I, G>(
    State(state): State<AppState<I, G>>,
    Path(session_id): Path<String>,
) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.session_service.get_session(id).await {
        Ok(snapshot) => (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response(),
        Err(e) => session_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_session_handler<I, G>(
    State(state): State<AppState<I, G>>,
    Path(session_id): Path<String>,
) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.session_service.delete_session(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => session_error_response(&e),
    }
}
