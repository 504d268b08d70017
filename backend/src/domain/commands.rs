//! Domain-level command and result types.
//!
//! Services only accept these. The REST layer maps the `shared` DTOs onto
//! them, keeping wire-format quirks (nulls, missing keys) out of the domain.

pub mod restaurants {
    use crate::domain::models::restaurant::DomainRestaurant;

    /// Input for adding a restaurant. Fields are raw and untrimmed.
    #[derive(Debug, Clone, Default)]
    pub struct AddRestaurantCommand {
        pub name: Option<String>,
        pub category: Option<String>,
        pub note: Option<String>,
    }

    /// Input for editing a restaurant. A blank name keeps the current one;
    /// the note is always overwritten.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateRestaurantCommand {
        pub id: i64,
        pub name: Option<String>,
        pub category: Option<String>,
        pub note: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteRestaurantResult {
        pub deleted: DomainRestaurant,
        /// Set when the restaurant was the last one in its category
        pub removed_category_id: Option<i64>,
    }
}

pub mod categories {
    #[derive(Debug, Clone, Default)]
    pub struct DeleteCategoriesCommand {
        pub category_ids: Vec<i64>,
    }
}

pub mod spin {
    /// An empty filter draws from every restaurant
    #[derive(Debug, Clone, Default)]
    pub struct SpinCommand {
        pub category_ids: Vec<i64>,
    }
}

pub mod stats {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatsSnapshot {
        pub restaurant_count: i64,
        pub total_spins: i64,
        pub page_views: i64,
    }
}

pub mod transfer {
    use crate::domain::models::category::Category;
    use crate::domain::models::restaurant::DomainRestaurant;

    #[derive(Debug, Clone, Default)]
    pub struct ImportEntry {
        pub name: Option<String>,
        pub category: Option<String>,
        pub note: Option<String>,
    }

    /// `restaurants` is None when the payload had no list at all
    #[derive(Debug, Clone, Default)]
    pub struct ImportCommand {
        pub restaurants: Option<Vec<ImportEntry>>,
    }

    #[derive(Debug, Clone)]
    pub struct ImportResult {
        /// Length of the submitted list, blank entries included
        pub imported: u64,
        /// Rows actually written
        pub created: u64,
    }

    #[derive(Debug, Clone)]
    pub struct ExportResult {
        pub restaurants: Vec<DomainRestaurant>,
        pub categories: Vec<Category>,
    }
}
