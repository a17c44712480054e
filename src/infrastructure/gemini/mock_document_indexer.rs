use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use crate::application::ports::{DocumentIndexer, IndexerError};
use crate::domain::{DocumentState, UploadedDocument};

/// In-process stand-in for the vendor file service.
pub struct MockDocumentIndexer {
    next_id: AtomicUsize,
    processing_polls: usize,
    final_state: DocumentState,
    polls: Mutex<HashMap<String, usize>>,
    deleted: Mutex<Vec<String>>,
}

impl MockDocumentIndexer {
    pub fn new() -> Self {
        Self::with_outcome(0, DocumentState::Active)
    }

    /// Reports `PROCESSING` for `processing_polls` checks, then `final_state`.
    pub fn with_outcome(processing_polls: usize, final_state: DocumentState) -> Self {
        Self {
            next_id: AtomicUsize::new(1),
            processing_polls,
            final_state,
            polls: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn deleted_handles(&self) -> Vec<String> {
        self.deleted.lock().map(|d| d.clone()).unwrap_or_default()
    }

    pub fn live_handles(&self) -> usize {
        self.polls.lock().map(|p| p.len()).unwrap_or_default()
    }
}

impl Default for MockDocumentIndexer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentIndexer for MockDocumentIndexer {
    async fn upload_document(
        &self,
        display_name: &str,
        mime_type: &str,
        _data: Bytes,
    ) -> Result<UploadedDocument, IndexerError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let handle = format!("files/mock-{}", id);

        self.polls
            .lock()
            .map_err(|e| IndexerError::ApiRequestFailed(e.to_string()))?
            .insert(handle.clone(), 0);

        Ok(UploadedDocument::new(
            handle.clone(),
            format!("mock://{}", handle),
            mime_type.to_string(),
            display_name.to_string(),
        ))
    }

    async fn document_state(&self, handle: &str) -> Result<DocumentState, IndexerError> {
        let mut polls = self
            .polls
            .lock()
            .map_err(|e| IndexerError::ApiRequestFailed(e.to_string()))?;
        let count = polls
            .get_mut(handle)
            .ok_or_else(|| IndexerError::NotFound(handle.to_string()))?;

        *count += 1;
        if *count <= self.processing_polls {
            Ok(DocumentState::Processing)
        } else {
            Ok(self.final_state)
        }
    }

    async fn delete_document(&self, handle: &str) -> Result<(), IndexerError> {
        let removed = self
            .polls
            .lock()
            .map_err(|e| IndexerError::ApiRequestFailed(e.to_string()))?
            .remove(handle);

        if removed.is_none() {
            return Err(IndexerError::NotFound(handle.to_string()));
        }

        self.deleted
            .lock()
            .map_err(|e| IndexerError::ApiRequestFailed(e.to_string()))?
            .push(handle.to_string());
        Ok(())
    }
}
