use anyhow::Result;
use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, Sqlite, SqliteConnection};

use crate::domain::models::restaurant::DomainRestaurant;

const SELECT_RESTAURANTS: &str = r#"
    SELECT r.id, r.name, r.category_id, c.name AS category_name, r.note, r.spin_count
    FROM restaurant r
    LEFT JOIN category c ON c.id = r.category_id
"#;

/// Repository for restaurant operations
#[derive(Clone, Default)]
pub struct RestaurantRepository;

impl RestaurantRepository {
    pub fn new() -> Self {
        Self
    }

    fn map_row(row: &SqliteRow) -> DomainRestaurant {
        DomainRestaurant {
            id: row.get("id"),
            name: row.get("name"),
            category_id: row.get("category_id"),
            category_name: row.get("category_name"),
            note: row.get("note"),
            spin_count: row.get("spin_count"),
        }
    }

    /// List all restaurants with their category names
    pub async fn list_restaurants(&self, conn: &mut SqliteConnection) -> Result<Vec<DomainRestaurant>> {
        let rows = sqlx::query(&format!("{} ORDER BY r.id ASC", SELECT_RESTAURANTS))
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.iter().map(Self::map_row).collect())
    }

    /// List restaurants whose category is one of `category_ids`
    pub async fn list_by_categories(
        &self,
        conn: &mut SqliteConnection,
        category_ids: &[i64],
    ) -> Result<Vec<DomainRestaurant>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_RESTAURANTS);
        builder.push(" WHERE r.category_id IN (");
        let mut separated = builder.separated(", ");
        for id in category_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY r.id ASC");

        let rows = builder.build().fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(Self::map_row).collect())
    }

    pub async fn get_restaurant(&self, conn: &mut SqliteConnection, id: i64) -> Result<Option<DomainRestaurant>> {
        let row = sqlx::query(&format!("{} WHERE r.id = ?", SELECT_RESTAURANTS))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.as_ref().map(Self::map_row))
    }

    /// Insert a restaurant with a zero spin count, returning its new id
    pub async fn store_restaurant(
        &self,
        conn: &mut SqliteConnection,
        name: &str,
        category_id: i64,
        note: Option<&str>,
    ) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO restaurant (name, category_id, note, spin_count)
            VALUES (?, ?, ?, 0)
            "#,
        )
        .bind(name)
        .bind(category_id)
        .bind(note)
        .execute(&mut *conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Persist name, category and note. The spin count is only touched by `increment_spin_count`.
    pub async fn update_restaurant(&self, conn: &mut SqliteConnection, restaurant: &DomainRestaurant) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE restaurant
            SET name = ?, category_id = ?, note = ?
            WHERE id = ?
            "#,
        )
        .bind(&restaurant.name)
        .bind(restaurant.category_id)
        .bind(&restaurant.note)
        .bind(restaurant.id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Returns true if the restaurant was found and deleted
    pub async fn delete_restaurant(&self, conn: &mut SqliteConnection, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM restaurant WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self, conn: &mut SqliteConnection) -> Result<u64> {
        let result = sqlx::query("DELETE FROM restaurant").execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    pub async fn increment_spin_count(&self, conn: &mut SqliteConnection, id: i64) -> Result<()> {
        sqlx::query("UPDATE restaurant SET spin_count = spin_count + 1 WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Restaurant count and the sum of their spin counts
    pub async fn count_and_total_spins(&self, conn: &mut SqliteConnection) -> Result<(i64, i64)> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS restaurant_count, COALESCE(SUM(spin_count), 0) AS total_spins FROM restaurant",
        )
        .fetch_one(&mut *conn)
        .await?;
        Ok((row.get("restaurant_count"), row.get("total_spins")))
    }
}
