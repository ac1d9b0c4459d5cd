use std::convert::identity;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::{env, fs, io, thread};

use deadpool_diesel::sqlite::Pool;
use diesel::SqliteConnection;
use orm::migrations::run_migrations;
use shared::error::{AsDbError, ContextDbInteractError};

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Throwaway SQLite database, removed when dropped.
pub struct TestDb {
    path: PathBuf,
    pool: Pool,
}

impl TestDb {
    pub fn new() -> Self {
        let name = format!(
            "test_db_{}_{}.sqlite",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        let path = env::temp_dir().join(name);

        let max_pool_size = env::var("DATABASE_POOL_SIZE")
            .unwrap_or_else(|_| 4.to_string())
            .parse::<usize>()
            .unwrap_or(4_usize);

        let pool_manager = deadpool_diesel::sqlite::Manager::new(
            path.to_string_lossy(),
            deadpool_diesel::Runtime::Tokio1,
        );

        let pool = Pool::builder(pool_manager)
            .max_size(max_pool_size)
            .build()
            .expect("Failed to build SQLite db pool");

        Self { path, pool }
    }

    pub fn pool(&self) -> Pool {
        self.pool.clone()
    }

    /// Applies migrations, then runs `test` inside a transaction on a pooled
    /// connection.
    pub async fn run_test(
        &self,
        test: impl FnOnce(&mut SqliteConnection) -> anyhow::Result<()>
            + Send
            + 'static,
    ) -> anyhow::Result<()> {
        let conn = self.pool.get().await?;

        run_migrations(&conn)
            .await
            .expect("Should be able to run migrations");

        conn.interact(move |conn| {
            diesel::Connection::transaction(conn, test)
        })
        .await
        .context_db_interact_error()
        .and_then(identity)
        .into_db_error()?;

        anyhow::Ok(())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!("TestDb leaking database {}", self.path.display());
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                eprintln!("Failed to remove {}: {}", self.path.display(), e)
            }
        }
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}
