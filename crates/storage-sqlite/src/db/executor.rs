use super::{get_connection, DbPool};
use crate::errors::StorageError;
use diesel::SqliteConnection;
use std::sync::Arc;
use tokio::task;
use tripfolio_core::errors::Result;

/// Runs database jobs off the async runtime.
///
/// Every job checks out its own pooled connection, and the connection is
/// returned to the pool when the job finishes, whether it succeeded or not.
/// Concurrent writers are serialized only by SQLite's own locking.
#[derive(Clone)]
pub struct DbExecutor {
    pool: Arc<DbPool>,
}

impl DbExecutor {
    pub fn new(pool: Arc<DbPool>) -> Self {
        DbExecutor { pool }
    }

    /// Executes a database job on a blocking thread.
    ///
    /// # Arguments
    /// * `job`: A closure that takes a mutable reference to `SqliteConnection`
    ///   and performs database operations.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            job(&mut *conn)
        })
        .await
        .map_err(|e| StorageError::TaskFailed(e.to_string()))?
    }
}
