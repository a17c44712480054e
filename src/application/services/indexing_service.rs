use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{DocumentIndexer, IndexerError};
use crate::domain::{DocumentState, SupportedFormat, UploadedDocument};

/// Uploads a syllabus and waits until the vendor can retrieve from it.
pub struct IndexingService<I>
where
    I: DocumentIndexer,
{
    indexer: Arc<I>,
    poll_interval: Duration,
}

impl<I> IndexingService<I>
where
    I: DocumentIndexer,
{
    pub fn new(indexer: Arc<I>, poll_interval: Duration) -> Self {
        Self {
            indexer,
            poll_interval,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn index(&self, filename: &str, data: Bytes) -> Result<UploadedDocument, IndexingError> {
        let format = Self::validate(filename, &data)?;

        let document = self
            .indexer
            .upload_document(filename, format.as_mime(), data)
            .await
            .map_err(IndexingError::Upload)?;

        tracing::debug!(handle = %document.handle, "Document uploaded, waiting for processing");

        match self.await_processing(&document.handle).await {
            Ok(()) => {
                tracing::info!(handle = %document.handle, filename = %filename, "Document active");
                Ok(document)
            }
            Err(e) => {
                self.discard(&document).await;
                Err(e)
            }
        }
    }

    /// Checks an upload locally, before anything is sent to the vendor.
    pub fn validate(filename: &str, data: &[u8]) -> Result<SupportedFormat, IndexingError> {
        let format = SupportedFormat::from_filename(filename)
            .ok_or_else(|| IndexingError::UnsupportedFormat(filename.to_string()))?;

        if data.is_empty() {
            return Err(IndexingError::EmptyFile(filename.to_string()));
        }

        Ok(format)
    }

    /// Best-effort removal of a remote document.
    pub async fn discard(&self, document: &UploadedDocument) -> Option<IndexerError> {
        match self.indexer.delete_document(&document.handle).await {
            Ok(()) => {
                tracing::debug!(handle = %document.handle, "Remote document deleted");
                None
            }
            Err(e) => {
                tracing::warn!(handle = %document.handle, error = %e, "Could not delete remote document");
                Some(e)
            }
        }
    }

    async fn await_processing(&self, handle: &str) -> Result<(), IndexingError> {
        loop {
            let state = self
                .indexer
                .document_state(handle)
                .await
                .map_err(IndexingError::StateCheck)?;

            match state {
                DocumentState::Processing => tokio::time::sleep(self.poll_interval).await,
                DocumentState::Active => return Ok(()),
                other => return Err(IndexingError::ProcessingFailed(other)),
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    #[error("Unsupported file type: {0}. Please upload a PDF, DOCX or TXT syllabus.")]
    UnsupportedFormat(String),
    #[error("The uploaded file {0} is empty.")]
    EmptyFile(String),
    #[error("An error occurred during upload: {0}")]
    Upload(IndexerError),
    #[error("An error occurred while checking the upload: {0}")]
    StateCheck(IndexerError),
    #[error("File processing failed with state: {0}")]
    ProcessingFailed(DocumentState),
}
