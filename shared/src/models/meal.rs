//! Meal Suggestion Model

use serde::{Deserialize, Serialize};

/// Dish suggestion attached to every availability response
///
/// `fallback` is true when the suggestion did not come from the upstream
/// recipe service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    pub name: String,
    pub category: String,
    pub thumbnail: String,
    pub source_url: String,
    pub fallback: bool,
}
