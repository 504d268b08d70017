use tracing::info;

use crate::domain::commands::stats::StatsSnapshot;
use crate::domain::errors::DomainResult;
use crate::storage::repositories::stats_repository::PAGE_VIEWS;
use crate::storage::{DbConnection, RestaurantRepository, StatsRepository};

#[derive(Clone)]
pub struct StatsService {
    db: DbConnection,
    restaurant_repository: RestaurantRepository,
    stats_repository: StatsRepository,
}

impl StatsService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            db,
            restaurant_repository: RestaurantRepository::new(),
            stats_repository: StatsRepository::new(),
        }
    }

    /// Count one page view, returning the new total
    pub async fn record_page_view(&self) -> DomainResult<i64> {
        let mut conn = self.db.acquire_writer().await?;
        let page_views = self.stats_repository.increment(&mut conn, PAGE_VIEWS).await?;
        info!("Page views: {}", page_views);
        Ok(page_views)
    }

    pub async fn get_stats(&self) -> DomainResult<StatsSnapshot> {
        let mut conn = self.db.pool().acquire().await?;
        let (restaurant_count, total_spins) = self
            .restaurant_repository
            .count_and_total_spins(&mut conn)
            .await?;
        let page_views = self.stats_repository.get(&mut conn, PAGE_VIEWS).await?;

        Ok(StatsSnapshot {
            restaurant_count,
            total_spins,
            page_views,
        })
    }
}
