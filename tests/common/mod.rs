use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use staffdir::db::DbPool;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A file-backed SQLite database in a temporary directory, migrated and
/// ready for a test. The directory is removed when the value drops.
pub struct TestDb {
    _dir: tempfile::TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("temp path is not valid UTF-8");

        let pool = staffdir::db::establish_connection_pool(
            database_url,
            &staffdir::db::PoolSettings::default(),
        )
        .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
