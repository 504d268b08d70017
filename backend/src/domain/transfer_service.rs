use tracing::{error, info};

use crate::domain::commands::transfer::{ExportResult, ImportCommand, ImportEntry, ImportResult};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::category::Category;
use crate::domain::models::restaurant::non_blank;
use crate::storage::{CategoryRepository, DbConnection, RestaurantRepository};

/// JSON export and destructive import of the whole restaurant list
#[derive(Clone)]
pub struct TransferService {
    db: DbConnection,
    restaurant_repository: RestaurantRepository,
    category_repository: CategoryRepository,
}

impl TransferService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            restaurant_repository: RestaurantRepository::new(),
            category_repository: CategoryRepository::new(),
        }
    }

    pub async fn export_all(&self) -> DomainResult<ExportResult> {
        let mut conn = self.db.pool().acquire().await?;
        let restaurants = self.restaurant_repository.list_restaurants(&mut conn).await?;
        let categories = self.category_repository.list_categories(&mut conn).await?;

        info!(
            "Exporting {} restaurants in {} categories",
            restaurants.len(),
            categories.len()
        );
        Ok(ExportResult {
            restaurants,
            categories,
        })
    }

    /// Replace every restaurant and category with the given entries.
    ///
    /// Entries with a blank name are skipped, but `imported` still reports the
    /// length of the submitted list. Either the whole import lands or nothing
    /// changes.
    pub async fn import_all(&self, command: ImportCommand) -> DomainResult<ImportResult> {
        let entries = match command.restaurants {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Err(DomainError::Validation("Invalid payload".to_string())),
        };
        let imported = entries.len() as u64;

        info!("Importing {} restaurants, replacing existing data", imported);

        match self.replace_all(&entries).await {
            Ok(created) => {
                info!("Import finished: {} submitted, {} created", imported, created);
                Ok(ImportResult { imported, created })
            }
            Err(e) => {
                error!("Import rolled back: {:?}", e);
                Err(DomainError::ImportFailed(e))
            }
        }
    }

    async fn replace_all(&self, entries: &[ImportEntry]) -> anyhow::Result<u64> {
        // Dropping the transaction on any early return rolls everything back
        let mut tx = self.db.begin().await?;

        self.restaurant_repository.delete_all(&mut tx).await?;
        self.category_repository.delete_all(&mut tx).await?;

        let mut created = 0;
        for entry in entries {
            let Some(name) = non_blank(entry.name.as_deref()) else {
                continue;
            };
            let category_name = Category::resolve_name(entry.category.as_deref());
            let note = non_blank(entry.note.as_deref());

            let category = self
                .category_repository
                .get_or_create(&mut tx, &category_name)
                .await?;
            self.restaurant_repository
                .store_restaurant(&mut tx, &name, category.id, note.as_deref())
                .await?;
            created += 1;
        }

        tx.commit().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::restaurants::AddRestaurantCommand;
    use crate::domain::commands::spin::SpinCommand;
    use crate::domain::{CategoryService, RestaurantService, SpinService};

    fn entry(name: &str, category: &str, note: Option<&str>) -> ImportEntry {
        ImportEntry {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            note: note.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_import_requires_a_non_empty_list() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = TransferService::new(db);

        let missing = service.import_all(ImportCommand { restaurants: None }).await;
        assert!(matches!(missing, Err(DomainError::Validation(_))));

        let empty = service
            .import_all(ImportCommand {
                restaurants: Some(Vec::new()),
            })
            .await;
        assert!(matches!(empty, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_import_skips_blank_names_but_reports_raw_length() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = TransferService::new(db.clone());
        let restaurants = RestaurantService::new(db);

        let result = service
            .import_all(ImportCommand {
                restaurants: Some(vec![
                    entry("   ", "Italian", None),
                    entry("Pasta Place", "Italian", None),
                    entry("Sushi Bar", "Japanese", Some("cash only")),
                ]),
            })
            .await
            .unwrap();

        // The reported count includes the skipped blank entry
        assert_eq!(result.imported, 3);
        assert_eq!(result.created, 2);
        assert_eq!(restaurants.list_restaurants().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_replaces_existing_data() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = TransferService::new(db.clone());
        let restaurants = RestaurantService::new(db.clone());
        let categories = CategoryService::new(db);

        restaurants
            .add_restaurant(AddRestaurantCommand {
                name: Some("Old Diner".to_string()),
                category: Some("American".to_string()),
                note: None,
            })
            .await
            .unwrap();

        service
            .import_all(ImportCommand {
                restaurants: Some(vec![entry("Taco Stand", "", None)]),
            })
            .await
            .unwrap();

        let all = restaurants.list_restaurants().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Taco Stand");
        assert_eq!(all[0].category_name.as_deref(), Some("unknown"));

        let names: Vec<String> = categories
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["unknown".to_string()]);
    }

    #[tokio::test]
    async fn test_export_then_import_round_trip_resets_spin_counts() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = TransferService::new(db.clone());
        let restaurants = RestaurantService::new(db.clone());
        let spin = SpinService::new(db);

        for (name, category, note) in [
            ("Pasta Place", "Italian", Some("https://pasta.example")),
            ("Pizza Hut", "Italian", None),
            ("Sushi Bar", "Japanese", None),
        ] {
            restaurants
                .add_restaurant(AddRestaurantCommand {
                    name: Some(name.to_string()),
                    category: Some(category.to_string()),
                    note: note.map(str::to_string),
                })
                .await
                .unwrap();
        }
        spin.spin(SpinCommand::default()).await.unwrap();

        let exported = service.export_all().await.unwrap();
        assert_eq!(exported.restaurants.len(), 3);
        assert_eq!(exported.categories.len(), 2);

        let entries = exported
            .restaurants
            .iter()
            .map(|r| ImportEntry {
                name: Some(r.name.clone()),
                category: r.category_name.clone(),
                note: r.note.clone(),
            })
            .collect();
        service
            .import_all(ImportCommand {
                restaurants: Some(entries),
            })
            .await
            .unwrap();

        let reimported = service.export_all().await.unwrap();
        let summary = |export: &ExportResult| {
            let mut rows: Vec<(String, Option<String>, Option<String>)> = export
                .restaurants
                .iter()
                .map(|r| (r.name.clone(), r.category_name.clone(), r.note.clone()))
                .collect();
            rows.sort();
            rows
        };
        assert_eq!(summary(&reimported), summary(&exported));
        assert!(reimported.restaurants.iter().all(|r| r.spin_count == 0));
    }

    #[tokio::test]
    async fn test_failed_import_rolls_back() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let service = TransferService::new(db.clone());
        let restaurants = RestaurantService::new(db.clone());

        restaurants
            .add_restaurant(AddRestaurantCommand {
                name: Some("Old Diner".to_string()),
                category: Some("American".to_string()),
                note: None,
            })
            .await
            .unwrap();

        // Make the store reject one of the incoming rows
        sqlx::query(
            r#"
            CREATE TRIGGER reject_boom BEFORE INSERT ON restaurant
            WHEN NEW.name = 'Boom'
            BEGIN
                SELECT RAISE(ABORT, 'rejected');
            END;
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let result = service
            .import_all(ImportCommand {
                restaurants: Some(vec![
                    entry("Pasta Place", "Italian", None),
                    entry("Boom", "Italian", None),
                ]),
            })
            .await;
        assert!(matches!(result, Err(DomainError::ImportFailed(_))));

        let all = restaurants.list_restaurants().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Old Diner");
        assert_eq!(all[0].category_name.as_deref(), Some("American"));
    }
}
