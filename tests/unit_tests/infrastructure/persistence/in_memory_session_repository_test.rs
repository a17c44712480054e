use chrono::{TimeDelta, Utc};

use syllabus_tutor::application::ports::{RepositoryError, SessionRepository};
use syllabus_tutor::domain::{Session, SessionId};
use syllabus_tutor::infrastructure::persistence::InMemorySessionRepository;

#[tokio::test]
async fn given_inserted_session_when_fetching_then_returns_same_session() {
    let repository = InMemorySessionRepository::new(4);
    let session = Session::new(5);
    let id = session.id;

    repository.insert(session).await.unwrap();

    let handle = repository.get(id).await.unwrap().unwrap();
    assert_eq!(handle.lock().await.id, id);
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_handle_when_mutating_then_change_visible_through_repository() {
    let repository = InMemorySessionRepository::new(4);
    let handle = repository.insert(Session::new(5)).await.unwrap();
    let id = handle.lock().await.id;

    handle.lock().await.record_question("What is a limit?").unwrap();

    let fetched = repository.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.lock().await.quota.remaining(), 4);
}

#[tokio::test]
async fn given_full_repository_when_inserting_then_capacity_error() {
    let repository = InMemorySessionRepository::new(1);
    repository.insert(Session::new(5)).await.unwrap();

    let result = repository.insert(Session::new(5)).await;

    assert!(matches!(result, Err(RepositoryError::CapacityReached(1))));
}

#[tokio::test]
async fn given_removed_session_when_fetching_then_returns_none() {
    let repository = InMemorySessionRepository::new(4);
    let handle = repository.insert(Session::new(5)).await.unwrap();
    let id = handle.lock().await.id;

    assert!(repository.remove(id).await.unwrap().is_some());

    assert!(repository.get(id).await.unwrap().is_none());
    assert!(repository.remove(id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let repository = InMemorySessionRepository::new(4);
    assert!(repository.get(SessionId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn given_idle_session_when_removing_idle_then_evicted_and_capacity_freed() {
    let repository = InMemorySessionRepository::new(1);
    let session = Session::new(5);
    let id = session.id;
    repository.insert(session).await.unwrap();

    let evicted = repository
        .remove_idle(Utc::now() + TimeDelta::seconds(1))
        .await
        .unwrap();

    assert_eq!(evicted.len(), 1);
    assert_eq!(evicted[0].lock().await.id, id);
    assert!(repository.get(id).await.unwrap().is_none());
    assert!(repository.insert(Session::new(5)).await.is_ok());
}

#[tokio::test]
async fn given_recent_session_when_removing_idle_then_kept() {
    let repository = InMemorySessionRepository::new(4);
    repository.insert(Session::new(5)).await.unwrap();

    let evicted = repository
        .remove_idle(Utc::now() - TimeDelta::hours(1))
        .await
        .unwrap();

    assert!(evicted.is_empty());
    assert_eq!(repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_session_in_use_when_removing_idle_then_kept() {
    let repository = InMemorySessionRepository::new(4);
    let handle = repository.insert(Session::new(5)).await.unwrap();
    let _in_flight = handle.lock().await;

    let evicted = repository
        .remove_idle(Utc::now() + TimeDelta::seconds(1))
        .await
        .unwrap();

    assert!(evicted.is_empty());
    assert_eq!(repository.count().await.unwrap(), 1);
}
