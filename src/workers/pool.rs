//! Bounded offload of parse work onto the blocking thread pool.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;

/// Error type for pool execution.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("worker pool is shut down")]
    Closed,
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Permit-bounded wrapper around `tokio::task::spawn_blocking`.
///
/// Keeps heavy parsing of large payloads off the async dispatch path.
/// A bound of zero leaves concurrency to tokio's blocking pool.
#[derive(Debug)]
pub struct ParsePool {
    permits: Option<Arc<Semaphore>>,
}

impl ParsePool {
    /// Create a pool allowing at most `worker_threads` concurrent tasks.
    pub fn new(worker_threads: usize) -> Self {
        let permits = if worker_threads == 0 {
            None
        } else {
            Some(Arc::new(Semaphore::new(worker_threads)))
        };
        Self { permits }
    }

    /// Run a closure on the blocking pool, waiting for a permit if the
    /// bound has been reached.
    pub async fn run<F, T>(&self, task: F) -> Result<T, PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let _permit = match &self.permits {
            Some(permits) => Some(
                permits
                    .clone()
                    .acquire_owned()
                    .await
                    .map_err(|_| PoolError::Closed)?,
            ),
            None => None,
        };

        let value = tokio::task::spawn_blocking(task).await?;
        Ok(value)
    }
}
