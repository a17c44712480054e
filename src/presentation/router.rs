use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AnswerGenerator, DocumentIndexer};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, clear_document_handler, create_session_handler, delete_session_handler,
    get_session_handler, health_handler, instruction_catalog_handler, select_instructions_handler,
    upload_document_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<I, G>(state: AppState<I, G>) -> Router
where
    I: DocumentIndexer + 'static,
    G: AnswerGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.settings.upload.max_file_size_bytes();

    Router::new()
        .route("/health", get(health_handler::<I, G>))
        .route("/api/v1/instructions", get(instruction_catalog_handler))
        .route("/api/v1/sessions", post(create_session_handler::<I, G>))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session_handler::<I, G>).delete(delete_session_handler::<I, G>),
        )
        .route(
            "/api/v1/sessions/{session_id}/instructions",
            put(select_instructions_handler::<I, G>),
        )
        .route(
            "/api/v1/sessions/{session_id}/document",
            post(upload_document_handler::<I, G>)
                .delete(clear_document_handler::<I, G>)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/{session_id}/questions",
            post(ask_handler::<I, G>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
