mod answer_generator;
mod document_indexer;
mod repository_error;
mod session_repository;

pub use answer_generator::{AnswerGenerator, AnswerRequest, GeneratorError};
pub use document_indexer::{DocumentIndexer, IndexerError};
pub use repository_error::RepositoryError;
pub use session_repository::{SessionHandle, SessionRepository};
