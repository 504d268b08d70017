//! # Domain Module
//!
//! Business rules of the lunch roulette: which inputs are valid, how
//! blank fields are defaulted, when categories are created or cleaned
//! up, and how a spin is drawn and counted.
//!
//! ## Business Rules
//!
//! - Restaurants must have a non-blank name
//! - A blank category becomes the "unknown" category
//! - Categories are created on first use and removed when their last
//!   restaurant is deleted (editing a restaurant never removes one)
//! - A spin picks uniformly among the candidates and bumps both the
//!   restaurant's and the global spin counter
//! - Import replaces everything or nothing

pub mod category_service;
pub mod commands;
pub mod errors;
pub mod models;
pub mod restaurant_service;
pub mod spin_service;
pub mod stats_service;
pub mod theme_service;
pub mod transfer_service;

pub use category_service::CategoryService;
pub use errors::{DomainError, DomainResult};
pub use restaurant_service::RestaurantService;
pub use spin_service::SpinService;
pub use stats_service::StatsService;
pub use theme_service::ThemeService;
pub use transfer_service::TransferService;
