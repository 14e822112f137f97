//! Helper for running the sync service layer inside async handlers.
//!
//! The storage backend is a blocking SQLite connection; every handler
//! moves its service call onto the blocking pool and maps failures into
//! `ApiError`.

use tokio::task::spawn_blocking;

use newsticker_service::ServiceError;

use crate::api_error::ApiError;

pub async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("join error: {e}")))?
        .map_err(ApiError::from)
}
