use super::domain::{ApplicantRecord, ApplicationId};

/// Storage abstraction so the service can run against any backing store.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError>;
    /// Replace an existing record. Fails with `NotFound` when the id is unknown.
    fn update(&self, record: ApplicantRecord) -> Result<ApplicantRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicantRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
