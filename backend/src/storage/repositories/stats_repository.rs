use anyhow::Result;
use sqlx::SqliteConnection;

/// Key of the page-view counter
pub const PAGE_VIEWS: &str = "page_views";
/// Key of the global spin counter
pub const SPIN_COUNT: &str = "spin_count";

/// Repository for global counters
#[derive(Clone, Default)]
pub struct StatsRepository;

impl StatsRepository {
    pub fn new() -> Self {
        Self
    }

    /// Atomically add one to `key`, creating the counter on first use.
    /// Returns the value after the increment.
    pub async fn increment(&self, conn: &mut SqliteConnection, key: &str) -> Result<i64> {
        let value: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO stats (key, value) VALUES (?, 1)
            ON CONFLICT(key) DO UPDATE SET value = value + 1
            RETURNING value
            "#,
        )
        .bind(key)
        .fetch_one(&mut *conn)
        .await?;
        Ok(value)
    }

    /// Current value of `key`; counters that were never incremented read as 0
    pub async fn get(&self, conn: &mut SqliteConnection, key: &str) -> Result<i64> {
        let value: Option<i64> = sqlx::query_scalar("SELECT value FROM stats WHERE key = ?")
            .bind(key)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(value.unwrap_or(0))
    }
}
