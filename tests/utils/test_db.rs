/// Isolated test database that is created per test and dropped afterwards
///
/// Uses TEST_DATABASE_URL to reach the database server. When the variable is
/// unset `TestDb::try_new` returns `None` and the calling test is skipped.
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};

use coursehub::shared::infrastructure::Database;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TestDb {
    server_url: String,
    name: String,
    database: Arc<Database>,
}

impl TestDb {
    /// Database name format: coursehub_test_{process_id}_{counter}
    pub fn try_new() -> Option<Self> {
        dotenvy::dotenv().ok();

        let Ok(server_url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set, skipping database test");
            return None;
        };

        let name = format!(
            "coursehub_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let mut conn = PgConnection::establish(&server_url)
            .expect("Failed to connect to test database server");
        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        let last_slash = server_url
            .rfind('/')
            .unwrap_or_else(|| panic!("Invalid TEST_DATABASE_URL format: {}", server_url));
        let isolated_url = format!("{}/{}", &server_url[..last_slash], name);

        let manager = ConnectionManager::<PgConnection>::new(isolated_url);
        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        let database = Arc::new(Database::from_pool(pool));
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Some(Self {
            server_url,
            name,
            database,
        })
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run raw SQL against the test database, for corrupting rows on purpose
    pub fn execute(&self, sql: &str) {
        let mut conn = self
            .database
            .get_connection()
            .expect("Unable to connect to the test database");
        sql_query(sql)
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to run '{}': {}", sql, e));
    }
}

impl Drop for TestDb {
    /// Leaves the database in place when the test panicked
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic, preserved for debugging",
                self.name
            );
            return;
        }

        let Ok(mut conn) = PgConnection::establish(&self.server_url) else {
            eprintln!("Failed to connect for cleanup of '{}'", self.name);
            return;
        };

        let _ = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn);

        let dropped = sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn);
        if let Err(e) = dropped {
            eprintln!("Failed to drop test database '{}': {}", self.name, e);
        }
    }
}

/// Evaluates to the test database or returns early from the test
#[macro_export]
macro_rules! test_db_or_skip {
    () => {
        match $crate::utils::test_db::TestDb::try_new() {
            Some(db) => db,
            None => return,
        }
    };
}
