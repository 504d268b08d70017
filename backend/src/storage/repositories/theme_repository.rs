use anyhow::Result;
use sqlx::{Row, SqliteConnection};

use crate::domain::models::theme::DomainTheme;

#[derive(Clone, Default)]
pub struct ThemeRepository;

impl ThemeRepository {
    pub fn new() -> Self {
        Self
    }

    /// List themes in their seeded order
    pub async fn list_themes(&self, conn: &mut SqliteConnection) -> Result<Vec<DomainTheme>> {
        let rows = sqlx::query("SELECT name, display_name FROM theme ORDER BY position ASC, name ASC")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .iter()
            .map(|row| DomainTheme {
                name: row.get("name"),
                display_name: row.get("display_name"),
            })
            .collect())
    }
}
