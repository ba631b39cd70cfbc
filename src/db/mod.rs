mod availability_repository;
pub mod models;
mod roster_repository;
mod task_repository;

use crate::constants::POOL_CONNECTION_TIMEOUT_SECS;
use crate::errors::Error;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use std::time::Duration;

pub use availability_repository::*;
pub use models::*;
pub use roster_repository::*;
pub use task_repository::*;

/// Schema migrations compiled into the binary; applied at startup and by tests
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    pub fn new(db_path: &str) -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let pool = Pool::builder()
            .connection_timeout(Duration::from_secs(POOL_CONNECTION_TIMEOUT_SECS))
            .build(manager)
            .expect("Failed to create pool.");

        Database {
            pool: Arc::new(pool),
        }
    }

    /// Checks a connection out of the pool within the configured bound
    ///
    /// # Errors
    ///
    /// Returns `RepositoryUnavailable` when no connection becomes free in time
    pub fn get_conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        self.pool
            .get()
            .map_err(|e| Error::RepositoryUnavailable(e.to_string()))
    }

    /// Applies any pending embedded migrations
    pub fn run_migrations(&self) -> Result<(), Error> {
        let mut conn = self.get_conn()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| Error::RepositoryUnavailable(e.to_string()))?;
        Ok(())
    }
}
