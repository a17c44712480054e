use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{GeneratorError, IndexerError, RepositoryError};
use crate::application::services::{IndexingError, SessionError};
use crate::domain::{InstructionError, SessionId};

use super::api_types::ErrorResponse;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Every failure reaches the student as the error's own message.
pub fn session_error_response(error: &SessionError) -> Response {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, status = %status, "Request failed");
    } else {
        tracing::warn!(error = %error, status = %status, "Request rejected");
    }
    error_response(status, error.to_string())
}

pub fn status_for(error: &SessionError) -> StatusCode {
    match error {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::EmptyQuestion => StatusCode::BAD_REQUEST,
        SessionError::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
        SessionError::NoDocument => StatusCode::CONFLICT,
        SessionError::Instructions(InstructionError::TooManyInstructions { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SessionError::Instructions(InstructionError::Unknown(_)) => StatusCode::BAD_REQUEST,
        SessionError::Indexing(e) => indexing_status(e),
        SessionError::Generation(GeneratorError::RateLimited) => StatusCode::SERVICE_UNAVAILABLE,
        SessionError::Generation(_) | SessionError::EmptyAnswer => StatusCode::BAD_GATEWAY,
        SessionError::Repository(RepositoryError::AlreadyExists(_)) => StatusCode::CONFLICT,
        SessionError::Repository(RepositoryError::CapacityReached(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

fn indexing_status(error: &IndexingError) -> StatusCode {
    match error {
        IndexingError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        IndexingError::EmptyFile(_) => StatusCode::BAD_REQUEST,
        IndexingError::Upload(IndexerError::RateLimited)
        | IndexingError::StateCheck(IndexerError::RateLimited) => StatusCode::SERVICE_UNAVAILABLE,
        IndexingError::Upload(_)
        | IndexingError::StateCheck(_)
        | IndexingError::ProcessingFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

pub fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|e| {
        tracing::warn!(session_id = %raw, "Malformed session id");
        error_response(StatusCode::BAD_REQUEST, e)
    })
}
