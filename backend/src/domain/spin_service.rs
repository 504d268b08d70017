use rand::seq::SliceRandom;
use tracing::info;

use crate::domain::commands::spin::SpinCommand;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::restaurant::DomainRestaurant;
use crate::storage::repositories::stats_repository::SPIN_COUNT;
use crate::storage::{DbConnection, RestaurantRepository, StatsRepository};

/// Draws a random restaurant and keeps the spin counters
#[derive(Clone)]
pub struct SpinService {
    db: DbConnection,
    restaurant_repository: RestaurantRepository,
    stats_repository: StatsRepository,
}

impl SpinService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            restaurant_repository: RestaurantRepository::new(),
            stats_repository: StatsRepository::new(),
        }
    }

    /// Pick one restaurant uniformly among the candidates and count the spin.
    ///
    /// Candidates are every restaurant when `category_ids` is empty, otherwise
    /// the restaurants in those categories.
    pub async fn spin(&self, command: SpinCommand) -> DomainResult<DomainRestaurant> {
        let mut tx = self.db.begin().await?;

        let candidates = if command.category_ids.is_empty() {
            self.restaurant_repository.list_restaurants(&mut tx).await?
        } else {
            self.restaurant_repository
                .list_by_categories(&mut tx, &command.category_ids)
                .await?
        };

        let chosen_id = candidates
            .choose(&mut rand::thread_rng())
            .map(|restaurant| restaurant.id)
            .ok_or_else(|| DomainError::NotFound("No restaurants in selected categories".to_string()))?;

        self.restaurant_repository
            .increment_spin_count(&mut tx, chosen_id)
            .await?;
        let total = self.stats_repository.increment(&mut tx, SPIN_COUNT).await?;

        let chosen = self
            .restaurant_repository
            .get_restaurant(&mut tx, chosen_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Restaurant {} disappeared during spin", chosen_id))?;
        tx.commit().await?;

        info!(
            "Spin picked {} (ID {}) out of {} candidates; {} spins overall",
            chosen.name,
            chosen.id,
            candidates.len(),
            total
        );
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::restaurants::AddRestaurantCommand;
    use crate::domain::RestaurantService;

    async fn setup_test() -> (SpinService, RestaurantService, DbConnection) {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        (SpinService::new(db.clone()), RestaurantService::new(db.clone()), db)
    }

    async fn add(service: &RestaurantService, name: &str, category: &str) -> DomainRestaurant {
        service
            .add_restaurant(AddRestaurantCommand {
                name: Some(name.to_string()),
                category: Some(category.to_string()),
                note: None,
            })
            .await
            .expect("Failed to add restaurant")
    }

    async fn global_spins(db: &DbConnection) -> i64 {
        let mut conn = db.pool().acquire().await.unwrap();
        StatsRepository::new().get(&mut conn, SPIN_COUNT).await.unwrap()
    }

    #[tokio::test]
    async fn test_spin_filtered_by_category() {
        let (spin, restaurants, _) = setup_test().await;

        let pasta = add(&restaurants, "Pasta Place", "Italian").await;
        add(&restaurants, "Sushi Bar", "Japanese").await;

        let chosen = spin
            .spin(SpinCommand {
                category_ids: vec![pasta.category_id],
            })
            .await
            .unwrap();

        assert_eq!(chosen.name, "Pasta Place");
        assert_eq!(chosen.spin_count, 1);
    }

    #[tokio::test]
    async fn test_spin_singleton_always_returns_same_restaurant() {
        let (spin, restaurants, db) = setup_test().await;

        let sushi = add(&restaurants, "Sushi Bar", "Japanese").await;
        add(&restaurants, "Pasta Place", "Italian").await;
        add(&restaurants, "Pizza Hut", "Italian").await;

        for round in 1..=10 {
            let chosen = spin
                .spin(SpinCommand {
                    category_ids: vec![sushi.category_id],
                })
                .await
                .unwrap();
            assert_eq!(chosen.id, sushi.id);
            assert_eq!(chosen.spin_count, round);
        }
        assert_eq!(global_spins(&db).await, 10);
    }

    #[tokio::test]
    async fn test_spin_result_stays_within_filter() {
        let (spin, restaurants, _) = setup_test().await;

        let pasta = add(&restaurants, "Pasta Place", "Italian").await;
        let pizza = add(&restaurants, "Pizza Hut", "Italian").await;
        let sushi = add(&restaurants, "Sushi Bar", "Japanese").await;
        add(&restaurants, "Taco Stand", "Mexican").await;

        let allowed = vec![pasta.category_id, sushi.category_id];
        for _ in 0..20 {
            let chosen = spin
                .spin(SpinCommand {
                    category_ids: allowed.clone(),
                })
                .await
                .unwrap();
            assert!(allowed.contains(&chosen.category_id));
            assert!([pasta.id, pizza.id, sushi.id].contains(&chosen.id));
        }
    }

    #[tokio::test]
    async fn test_spin_without_filter_uses_all_restaurants() {
        let (spin, restaurants, _) = setup_test().await;

        let only = add(&restaurants, "Taco Stand", "Mexican").await;

        let chosen = spin.spin(SpinCommand::default()).await.unwrap();
        assert_eq!(chosen.id, only.id);
    }

    #[tokio::test]
    async fn test_spin_increments_counters_by_one() {
        let (spin, restaurants, db) = setup_test().await;

        add(&restaurants, "Pasta Place", "Italian").await;
        add(&restaurants, "Sushi Bar", "Japanese").await;

        let before = restaurants.list_restaurants().await.unwrap();
        let spins_before = global_spins(&db).await;

        let chosen = spin.spin(SpinCommand::default()).await.unwrap();

        let after = restaurants.list_restaurants().await.unwrap();
        for (old, new) in before.iter().zip(after.iter()) {
            let expected = if old.id == chosen.id { old.spin_count + 1 } else { old.spin_count };
            assert_eq!(new.spin_count, expected);
        }
        assert_eq!(global_spins(&db).await, spins_before + 1);
    }

    #[tokio::test]
    async fn test_spin_empty_selection_is_not_found() {
        let (spin, restaurants, db) = setup_test().await;

        let result = spin.spin(SpinCommand::default()).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));

        add(&restaurants, "Pasta Place", "Italian").await;
        let result = spin
            .spin(SpinCommand {
                category_ids: vec![9999],
            })
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));

        assert_eq!(global_spins(&db).await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_spins_are_all_counted() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite:{}", dir.path().join("roulette.db").display());
        let db = DbConnection::new(&url).await.expect("Failed to create file database");
        let restaurants = RestaurantService::new(db.clone());
        let spin = SpinService::new(db.clone());

        add(&restaurants, "Pasta Place", "Italian").await;
        add(&restaurants, "Sushi Bar", "Japanese").await;
        add(&restaurants, "Taco Stand", "Mexican").await;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let spin = spin.clone();
                tokio::spawn(async move { spin.spin(SpinCommand::default()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().expect("concurrent spin should succeed");
        }

        assert_eq!(global_spins(&db).await, 20);
        let total: i64 = restaurants
            .list_restaurants()
            .await
            .unwrap()
            .iter()
            .map(|r| r.spin_count)
            .sum();
        assert_eq!(total, 20);
    }
}
