mod gemini_client;
mod mock_answer_generator;
mod mock_document_indexer;

pub use gemini_client::{DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, GeminiClient};
pub use mock_answer_generator::MockAnswerGenerator;
pub use mock_document_indexer::MockDocumentIndexer;
