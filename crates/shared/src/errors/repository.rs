use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Maps a sqlx failure, turning a storage-level unique violation into
    /// `AlreadyExists` so callers can surface a friendly field error. The
    /// unique indexes are the arbiter for uniqueness; service-level
    /// pre-checks are advisory only.
    pub fn from_sqlx(err: SqlxError, conflict_subject: &str) -> Self {
        if let SqlxError::Database(db_err) = &err {
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return RepositoryError::AlreadyExists(conflict_subject.to_string());
            }
        }
        RepositoryError::Sqlx(err)
    }
}
