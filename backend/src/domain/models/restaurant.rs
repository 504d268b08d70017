#[derive(Debug, Clone, PartialEq)]
pub struct DomainRestaurant {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Resolved by join at read time; None when the category row is missing
    pub category_name: Option<String>,
    pub note: Option<String>,
    pub spin_count: i64,
}

/// Trim a loosely-typed input field, treating blank as absent.
/// Used for restaurant names and notes.
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
