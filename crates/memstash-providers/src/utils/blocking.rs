//! Blocking call bridge
//!
//! The memcache client is synchronous; async callers hand its calls to the
//! tokio blocking pool.

use memstash_domain::error::{Error, Result};

/// Run a fallible blocking closure on the tokio blocking pool.
///
/// A panicking or cancelled task is reported as [`Error::Internal`].
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("blocking task failed: {e}")))?
}
