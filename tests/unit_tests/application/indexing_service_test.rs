use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use syllabus_tutor::application::services::{IndexingError, IndexingService};
use syllabus_tutor::domain::DocumentState;
use syllabus_tutor::infrastructure::gemini::MockDocumentIndexer;

fn service(indexer: Arc<MockDocumentIndexer>) -> IndexingService<MockDocumentIndexer> {
    IndexingService::new(indexer, Duration::from_millis(1))
}

#[tokio::test]
async fn given_processing_document_when_indexing_then_waits_until_active() {
    let indexer = Arc::new(MockDocumentIndexer::with_outcome(3, DocumentState::Active));
    let service = service(Arc::clone(&indexer));

    let document = service
        .index("algebra.pdf", Bytes::from_static(b"%PDF-1.4"))
        .await
        .unwrap();

    assert_eq!(document.display_name, "algebra.pdf");
    assert_eq!(document.mime_type, "application/pdf");
    assert!(document.handle.starts_with("files/"));
    assert_eq!(indexer.live_handles(), 1);
}

#[tokio::test]
async fn given_failed_processing_when_indexing_then_error_and_remote_file_deleted() {
    let indexer = Arc::new(MockDocumentIndexer::with_outcome(1, DocumentState::Failed));
    let service = service(Arc::clone(&indexer));

    let result = service
        .index("algebra.txt", Bytes::from_static(b"limits"))
        .await;

    assert!(matches!(
        result,
        Err(IndexingError::ProcessingFailed(DocumentState::Failed))
    ));
    assert_eq!(indexer.deleted_handles().len(), 1);
    assert_eq!(indexer.live_handles(), 0);
}

#[tokio::test]
async fn given_unsupported_extension_when_indexing_then_rejected_before_upload() {
    let indexer = Arc::new(MockDocumentIndexer::new());
    let service = service(Arc::clone(&indexer));

    let result = service
        .index("lecture.mp4", Bytes::from_static(b"video"))
        .await;

    assert!(matches!(result, Err(IndexingError::UnsupportedFormat(_))));
    assert_eq!(indexer.live_handles(), 0);
}

#[tokio::test]
async fn given_empty_file_when_indexing_then_rejected() {
    let indexer = Arc::new(MockDocumentIndexer::new());
    let service = service(indexer);

    let result = service.index("empty.txt", Bytes::new()).await;

    assert!(matches!(result, Err(IndexingError::EmptyFile(_))));
}

#[tokio::test]
async fn given_unknown_handle_when_discarding_then_reports_error_without_failing() {
    let indexer = Arc::new(MockDocumentIndexer::new());
    let service = service(indexer);
    let ghost = syllabus_tutor::domain::UploadedDocument::new(
        "files/ghost".to_string(),
        "mock://files/ghost".to_string(),
        "text/plain".to_string(),
        "ghost.txt".to_string(),
    );

    let error = service.discard(&ghost).await;

    assert!(error.is_some());
}
