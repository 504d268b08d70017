use crate::domain::errors::DomainResult;
use crate::domain::models::theme::DomainTheme;
use crate::storage::{DbConnection, ThemeRepository};

/// Read-only access to the seeded UI themes
#[derive(Clone)]
pub struct ThemeService {
    db: DbConnection,
    theme_repository: ThemeRepository,
}

impl ThemeService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            theme_repository: ThemeRepository::new(),
        }
    }

    pub async fn list_themes(&self) -> DomainResult<Vec<DomainTheme>> {
        let mut conn = self.db.pool().acquire().await?;
        Ok(self.theme_repository.list_themes(&mut conn).await?)
    }
}
