use serde::{Deserialize, Serialize};

/// A named grouping of restaurants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A restaurant as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    /// Category name resolved at read time ("unknown" if the reference is dangling)
    pub category: String,
    pub category_id: i64,
    /// Optional free text, often a link to a menu
    pub note: Option<String>,
    /// How many times this restaurant has been picked
    pub spin_count: i64,
}

/// Body of POST /api/restaurants
///
/// Every field is optional on the wire; blank or missing values are
/// substituted by the domain layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Body of PUT /api/restaurants/:id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Body of DELETE /api/categories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteCategoriesRequest {
    pub category_ids: Option<Vec<i64>>,
}

/// Body of POST /api/spin. An empty, null or missing list means "all categories".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinRequest {
    pub category_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub restaurant_count: i64,
    /// Sum of every restaurant's spin count
    pub total_spins: i64,
    pub page_views: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewResponse {
    pub page_views: i64,
}

/// Full dump returned by GET /api/export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub restaurants: Vec<Restaurant>,
    pub categories: Vec<Category>,
}

/// One entry of an import payload. Exported restaurants deserialize into
/// this shape too; their extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportRestaurant {
    pub name: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Body of POST /api/import
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportRequest {
    pub restaurants: Option<Vec<ImportRestaurant>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: u64,
}

/// A UI colour theme offered to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
}

/// Error body returned for every non-2xx API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
