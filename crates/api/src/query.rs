//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/projects` (`?category=`).
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
}

impl ProjectListParams {
    /// The category filter, treating an empty value as no filter.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
