//! Database connection helpers.
//!
//! Small wrapper around the Diesel r2d2 pool used to reach the SQLite
//! database backing the directory. Pool sizing and lock patience come
//! from [`crate::models::config::ServerConfig`] rather than being baked
//! in here.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pool knobs surfaced through the server configuration.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum number of pooled connections.
    pub max_size: u32,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_size: 10,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
/// Pragmas applied each time a connection is acquired from the pool.
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA journal_mode = WAL; \
             PRAGMA synchronous = NORMAL; \
             PRAGMA foreign_keys = ON; \
             PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(settings.max_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: settings.busy_timeout,
        }))
        .build(manager)
}

/// Retrieve a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}
