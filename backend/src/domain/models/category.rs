/// Name given to restaurants added without a category
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// Trim a raw category name, substituting "unknown" when nothing is left
    pub fn resolve_name(raw: Option<&str>) -> String {
        match raw.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_CATEGORY.to_string(),
        }
    }
}
