pub mod category_repository;
pub mod restaurant_repository;
pub mod stats_repository;
pub mod theme_repository;

pub use category_repository::CategoryRepository;
pub use restaurant_repository::RestaurantRepository;
pub use stats_repository::StatsRepository;
pub use theme_repository::ThemeRepository;
