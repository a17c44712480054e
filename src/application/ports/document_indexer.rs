use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{DocumentState, UploadedDocument};

/// External service that stores a file and prepares it for retrieval.
#[async_trait]
pub trait DocumentIndexer: Send + Sync {
    async fn upload_document(
        &self,
        display_name: &str,
        mime_type: &str,
        data: Bytes,
    ) -> Result<UploadedDocument, IndexerError>;

    async fn document_state(&self, handle: &str) -> Result<DocumentState, IndexerError>;

    async fn delete_document(&self, handle: &str) -> Result<(), IndexerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IndexerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("document not found: {0}")]
    NotFound(String),
}
