use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::core::config::DatabaseConfig;
use crate::core::error::AppResult;

pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        info!("Connecting to database: {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = if is_in_memory(&config.url) {
            single_connection()
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        }
        .connect_with(options)
        .await?;

        Ok(Self { pool })
    }

    /// Open a migrated in-memory database.
    pub async fn open_in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = single_connection().connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub async fn migrate(&self) -> AppResult<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Every SQLite connection to an in-memory database gets its own copy, so
/// these pools hold exactly one connection that never expires.
fn single_connection() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_has_board_table() {
        let db = Database::open_in_memory().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM board")
            .fetch_one(db.pool())
            .await
            .unwrap();

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_configured_memory_url_keeps_schema() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
        };
        let db = Database::new(&config).await.unwrap();
        db.migrate().await.unwrap();

        assert_eq!(db.pool().options().get_max_connections(), 1);

        for _ in 0..5 {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM board")
                .fetch_one(db.pool())
                .await
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:blog?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:./blog.db"));
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = Database::open_in_memory().await.unwrap();
        db.migrate().await.unwrap();
    }
}
