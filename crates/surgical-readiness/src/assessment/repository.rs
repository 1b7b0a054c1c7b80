use crate::surgical::{MarkerRecord, UserId};

/// Storage seam for scored assessments so the service can be exercised in
/// isolation from the hosted database.
pub trait MarkerRepository: Send + Sync {
    fn insert(&self, record: MarkerRecord) -> Result<MarkerRecord, RepositoryError>;

    /// Every assessment for the user, newest `assessment_date` first.
    fn history(&self, user_id: &UserId) -> Result<Vec<MarkerRecord>, RepositoryError>;

    fn latest(&self, user_id: &UserId) -> Result<Option<MarkerRecord>, RepositoryError> {
        Ok(self.history(user_id)?.into_iter().next())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("assessment already exists")]
    Conflict,
    #[error("no assessment found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
