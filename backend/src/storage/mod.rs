//! # Storage Module
//!
//! SQLite persistence for the roulette: connection management, one-time
//! schema bootstrap and one repository per table.
//!
//! Repositories are stateless and take a `&mut SqliteConnection`, so the
//! domain layer decides whether a call runs on a pooled connection or
//! inside a transaction.

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{
    CategoryRepository,
    RestaurantRepository,
    StatsRepository,
    ThemeRepository,
};
