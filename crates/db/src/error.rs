use haul_core::error::CoreError;

/// Error returned by repository operations that validate or decide before
/// writing.
///
/// Domain rejections stay typed as [`CoreError`]; anything the database
/// reports is surfaced unchanged as [`RepoError::Storage`]. Nothing is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
