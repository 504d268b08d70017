use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Row, Sqlite, SqlitePool, Transaction,
};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::domain::models::theme::DEFAULT_THEMES;

/// DbConnection owns the SQLite pools shared by every repository.
///
/// Reads go through `pool`. Writes go through `writer`, which holds a single
/// connection, so at most one write transaction is open at a time.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
    writer: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and bring its schema up to date
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let options = SqliteConnectOptions::from_str(url)?
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));
        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;

        Self::setup_schema(&writer).await?;
        Self::add_missing_counter_columns(&writer).await?;
        Self::seed_themes(&writer).await?;

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
            writer: Arc::new(writer),
        })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction for a multi-step write
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.writer.begin().await?)
    }

    /// The write connection, for single-statement writes outside a transaction
    pub async fn acquire_writer(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.writer.acquire().await?)
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL UNIQUE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS restaurant (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(150) NOT NULL,
                category_id INTEGER NOT NULL,
                note TEXT,
                view_count INTEGER NOT NULL DEFAULT 0,
                spin_count INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (category_id) REFERENCES category (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Spin filtering and empty-category checks both go through category_id
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_restaurant_category_id
            ON restaurant(category_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stats (
                key VARCHAR(50) PRIMARY KEY,
                value INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS theme (
                name VARCHAR(50) PRIMARY KEY,
                display_name VARCHAR(100) NOT NULL,
                position INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Databases created before spin tracking existed lack the counter columns
    async fn add_missing_counter_columns(pool: &SqlitePool) -> Result<()> {
        let rows = sqlx::query("PRAGMA table_info(restaurant)")
            .fetch_all(pool)
            .await?;
        let columns: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        for column in ["view_count", "spin_count"] {
            if !columns.iter().any(|c| c == column) {
                info!("Adding missing column restaurant.{}", column);
                sqlx::query(&format!(
                    "ALTER TABLE restaurant ADD COLUMN {} INTEGER NOT NULL DEFAULT 0",
                    column
                ))
                .execute(pool)
                .await?;
            }
        }

        Ok(())
    }

    async fn seed_themes(pool: &SqlitePool) -> Result<()> {
        for (position, (name, display_name)) in DEFAULT_THEMES.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO theme (name, display_name, position)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(*name)
            .bind(*display_name)
            .bind(position as i64)
            .execute(pool)
            .await?;
        }
        Ok(())
    }
}
