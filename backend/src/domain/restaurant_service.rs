use tracing::{info, warn};

use crate::domain::commands::restaurants::{
    AddRestaurantCommand, DeleteRestaurantResult, UpdateRestaurantCommand,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::category::{Category, UNKNOWN_CATEGORY};
use crate::domain::models::restaurant::{non_blank, DomainRestaurant};
use crate::storage::{CategoryRepository, DbConnection, RestaurantRepository};

/// Service for the restaurant list: add, edit, delete and bulk delete
#[derive(Clone)]
pub struct RestaurantService {
    db: DbConnection,
    restaurant_repository: RestaurantRepository,
    category_repository: CategoryRepository,
}

impl RestaurantService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            restaurant_repository: RestaurantRepository::new(),
            category_repository: CategoryRepository::new(),
        }
    }

    /// List every restaurant with its category name
    pub async fn list_restaurants(&self) -> DomainResult<Vec<DomainRestaurant>> {
        let mut conn = self.db.pool().acquire().await?;
        let restaurants = self.restaurant_repository.list_restaurants(&mut conn).await?;
        info!("Found {} restaurants", restaurants.len());
        Ok(restaurants)
    }

    /// Add a restaurant, creating its category on first use
    pub async fn add_restaurant(&self, command: AddRestaurantCommand) -> DomainResult<DomainRestaurant> {
        let name = non_blank(command.name.as_deref())
            .ok_or_else(|| DomainError::Validation("Restaurant name is required".to_string()))?;
        let category_name = Category::resolve_name(command.category.as_deref());
        let note = non_blank(command.note.as_deref());

        info!("Adding restaurant: name={}, category={}", name, category_name);

        let mut tx = self.db.begin().await?;
        let category = self
            .category_repository
            .get_or_create(&mut tx, &category_name)
            .await?;
        let id = self
            .restaurant_repository
            .store_restaurant(&mut tx, &name, category.id, note.as_deref())
            .await?;
        let restaurant = self
            .restaurant_repository
            .get_restaurant(&mut tx, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Restaurant {} missing right after insert", id))?;
        tx.commit().await?;

        info!("Added restaurant {} with ID: {}", restaurant.name, restaurant.id);
        Ok(restaurant)
    }

    /// Edit a restaurant.
    ///
    /// Moving a restaurant to another category leaves the old category in
    /// place even when it ends up empty; only deletes clean up categories.
    pub async fn update_restaurant(&self, command: UpdateRestaurantCommand) -> DomainResult<DomainRestaurant> {
        info!("Updating restaurant: {}", command.id);

        let mut tx = self.db.begin().await?;
        let mut restaurant = self
            .restaurant_repository
            .get_restaurant(&mut tx, command.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Restaurant not found".to_string()))?;

        if let Some(name) = non_blank(command.name.as_deref()) {
            restaurant.name = name;
        }

        let category_name = Category::resolve_name(command.category.as_deref());
        let current_category = restaurant
            .category_name
            .as_deref()
            .unwrap_or(UNKNOWN_CATEGORY);
        if category_name != current_category {
            let category = self
                .category_repository
                .get_or_create(&mut tx, &category_name)
                .await?;
            info!(
                "Moving restaurant {} from '{}' to '{}'",
                restaurant.id, current_category, category.name
            );
            restaurant.category_id = category.id;
            restaurant.category_name = Some(category.name);
        }

        restaurant.note = non_blank(command.note.as_deref());

        self.restaurant_repository
            .update_restaurant(&mut tx, &restaurant)
            .await?;
        tx.commit().await?;

        info!("Updated restaurant {} with ID: {}", restaurant.name, restaurant.id);
        Ok(restaurant)
    }

    /// Delete a restaurant, and its category too if nothing else is left in it
    pub async fn delete_restaurant(&self, id: i64) -> DomainResult<DeleteRestaurantResult> {
        info!("Deleting restaurant: {}", id);

        let mut tx = self.db.begin().await?;
        let restaurant = match self.restaurant_repository.get_restaurant(&mut tx, id).await? {
            Some(restaurant) => restaurant,
            None => {
                warn!("Restaurant not found: {}", id);
                return Err(DomainError::NotFound("Restaurant not found".to_string()));
            }
        };

        self.restaurant_repository.delete_restaurant(&mut tx, id).await?;

        let remaining = self
            .category_repository
            .count_restaurants(&mut tx, restaurant.category_id)
            .await?;
        let removed_category_id = if remaining == 0 {
            self.category_repository
                .delete_category(&mut tx, restaurant.category_id)
                .await?;
            info!("Removed empty category {}", restaurant.category_id);
            Some(restaurant.category_id)
        } else {
            None
        };
        tx.commit().await?;

        Ok(DeleteRestaurantResult {
            deleted: restaurant,
            removed_category_id,
        })
    }

    /// Remove every restaurant and every category. Returns the number of restaurants removed.
    pub async fn delete_all_restaurants(&self) -> DomainResult<u64> {
        let mut tx = self.db.begin().await?;
        let deleted = self.restaurant_repository.delete_all(&mut tx).await?;
        let categories = self.category_repository.delete_all(&mut tx).await?;
        tx.commit().await?;

        info!("Deleted {} restaurants and {} categories", deleted, categories);
        Ok(deleted)
    }
}
