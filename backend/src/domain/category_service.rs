use tracing::info;

use crate::domain::commands::categories::DeleteCategoriesCommand;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::category::Category;
use crate::storage::{CategoryRepository, DbConnection};

#[derive(Clone)]
pub struct CategoryService {
    db: DbConnection,
    category_repository: CategoryRepository,
}

impl CategoryService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            category_repository: CategoryRepository::new(),
        }
    }

    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let mut conn = self.db.pool().acquire().await?;
        let categories = self.category_repository.list_categories(&mut conn).await?;
        info!("Found {} categories", categories.len());
        Ok(categories)
    }

    /// Delete the given categories along with their restaurants.
    /// Returns how many of the ids matched a category.
    pub async fn delete_categories(&self, command: DeleteCategoriesCommand) -> DomainResult<u64> {
        if command.category_ids.is_empty() {
            return Err(DomainError::Validation("No categories selected".to_string()));
        }

        let mut conn = self.db.acquire_writer().await?;
        let deleted = self
            .category_repository
            .delete_categories(&mut conn, &command.category_ids)
            .await?;

        info!(
            "Deleted {} of {} requested categories",
            deleted,
            command.category_ids.len()
        );
        Ok(deleted)
    }
}
