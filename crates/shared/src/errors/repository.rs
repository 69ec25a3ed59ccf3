use sqlx::Error as SqlxError;
use thiserror::Error;

/// SQLSTATE codes that mean "the transaction could not proceed in time",
/// as opposed to a logic or integrity failure.
const TRANSIENT_SQLSTATES: &[&str] = &[
    "55P03", // lock_not_available
    "57014", // query_canceled (statement_timeout)
    "40001", // serialization_failure
    "40P01", // deadlock_detected
];

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::PoolTimedOut => {
                RepositoryError::Unavailable("timed out acquiring a connection".into())
            }
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) => match db_err.code() {
                Some(code) if TRANSIENT_SQLSTATES.contains(&code.as_ref()) => {
                    RepositoryError::Unavailable(format!("transaction aborted ({code})"))
                }
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
