#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists: {0}")]
    AlreadyExists(String),
    #[error("capacity reached: {0} sessions")]
    CapacityReached(usize),
}
