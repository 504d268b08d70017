use anyhow::Result;
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection};

use crate::domain::models::category::Category;

/// Repository for category operations
///
/// Methods take a connection rather than the pool so callers can run
/// several of them inside one transaction.
#[derive(Clone, Default)]
pub struct CategoryRepository;

impl CategoryRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_categories(&self, conn: &mut SqliteConnection) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name FROM category ORDER BY id ASC")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Category {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }

    pub async fn find_by_name(&self, conn: &mut SqliteConnection, name: &str) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM category WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|r| Category {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }

    /// Look up a category by exact name, creating it when absent.
    ///
    /// The insert is a no-op when another writer created the same name first,
    /// so the UNIQUE constraint decides the winner and both callers see one row.
    pub async fn get_or_create(&self, conn: &mut SqliteConnection, name: &str) -> Result<Category> {
        sqlx::query("INSERT INTO category (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(&mut *conn)
            .await?;

        self.find_by_name(conn, name)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Category vanished after insert: {}", name))
    }

    /// Number of restaurants still pointing at the category
    pub async fn count_restaurants(&self, conn: &mut SqliteConnection, category_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant WHERE category_id = ?")
            .bind(category_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Returns true if the category was found and deleted
    pub async fn delete_category(&self, conn: &mut SqliteConnection, category_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM category WHERE id = ?")
            .bind(category_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every listed category; their restaurants go with them via the FK cascade
    pub async fn delete_categories(&self, conn: &mut SqliteConnection, category_ids: &[i64]) -> Result<u64> {
        if category_ids.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM category WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in category_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_all(&self, conn: &mut SqliteConnection) -> Result<u64> {
        let result = sqlx::query("DELETE FROM category").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}
