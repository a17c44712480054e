use async_trait::async_trait;

use crate::domain::UploadedDocument;

#[derive(Debug, Clone)]
pub struct AnswerRequest<'a> {
    pub system_instruction: &'a str,
    pub document: &'a UploadedDocument,
    pub question: &'a str,
}

#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate_answer(&self, request: AnswerRequest<'_>) -> Result<String, GeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
