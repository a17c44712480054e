use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::presentation::state::AppState;

use super::api_types::{ClearResponse, SessionResponse};
use super::error::{error_response, parse_session_id, session_error_response};

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler<I, G>(
    State(state): State<AppState<I, G>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let max_file_size_mb = state.settings.upload.max_file_size_mb;

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => return multipart_error_response(e, max_file_size_mb),
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => return multipart_error_response(e, max_file_size_mb),
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Syllabus received");

    match state
        .session_service
        .attach_document(id, &filename, data)
        .await
    {
        Ok(snapshot) => (StatusCode::OK, Json(SessionResponse::from(snapshot))).into_response(),
        Err(e) => session_error_response(&e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn clear_document_handler<I, G>(
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

    match state.session_service.clear_document(id).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ClearResponse {
                session: SessionResponse::from(outcome.session),
                warning: outcome.warning,
            }),
        )
            .into_response(),
        Err(e) => session_error_response(&e),
    }
}

fn multipart_error_response(error: MultipartError, max_file_size_mb: usize) -> Response {
    let status = error.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(limit_mb = max_file_size_mb, "Syllabus exceeds upload limit");
        return error_response(
            status,
            format!(
                "File is too large. The upload limit is {} MB.",
                max_file_size_mb
            ),
        );
    }

    tracing::warn!(error = %error, status = %status, "Failed to read multipart");
    error_response(status, format!("Failed to read upload: {}", error.body_text()))
}
