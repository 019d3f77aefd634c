//! Meal suggestion
//!
//! Every availability response carries one dish suggestion. The upstream
//! recipe service is best effort: any failure degrades to a fixed house
//! suggestion and the search itself never fails because of it.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use shared::models::MealSuggestion;

pub const DEFAULT_MEAL_API_URL: &str = "https://www.themealdb.com/api/json/v1/1/random.php";
pub const DEFAULT_MEAL_SOURCE: &str = "https://www.themealdb.com";

const FALLBACK_NAME: &str = "Chef's daily special";
const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Source of the dish suggested alongside a search
#[async_trait]
pub trait MealSuggester: Send + Sync {
    /// Never fails; implementations degrade to [`fallback_suggestion`]
    async fn suggest_meal(&self) -> MealSuggestion;
}

/// Suggestion used when the recipe service cannot be reached or parsed
pub fn fallback_suggestion() -> MealSuggestion {
    MealSuggestion {
        name: "Chef's surprise".to_string(),
        category: "House recommendation".to_string(),
        thumbnail: String::new(),
        source_url: DEFAULT_MEAL_SOURCE.to_string(),
        fallback: true,
    }
}

/// Random meal from TheMealDB
#[derive(Debug, Clone)]
pub struct TheMealDbSuggester {
    client: reqwest::Client,
    url: String,
}

impl TheMealDbSuggester {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn fetch(&self) -> Result<Value, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await
    }
}

#[async_trait]
impl MealSuggester for TheMealDbSuggester {
    async fn suggest_meal(&self) -> MealSuggestion {
        let body = match self.fetch().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Meal service unavailable, using fallback");
                return fallback_suggestion();
            }
        };
        match parse_meal(&body) {
            Some(meal) => meal,
            None => {
                tracing::warn!(url = %self.url, "Meal service returned no usable meal, using fallback");
                fallback_suggestion()
            }
        }
    }
}

/// Extract `meals[0]`; `None` when there is no meal object to read
pub fn parse_meal(body: &Value) -> Option<MealSuggestion> {
    let meal = body.get("meals")?.as_array()?.first()?.as_object()?;
    let field = |key: &str, default: &str| -> String {
        meal.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    };

    Some(MealSuggestion {
        name: field("strMeal", FALLBACK_NAME),
        category: field("strCategory", FALLBACK_CATEGORY),
        thumbnail: field("strMealThumb", ""),
        source_url: field("strSource", DEFAULT_MEAL_SOURCE),
        fallback: false,
    })
}

/// Always returns the same suggestion; offline mode and tests
#[derive(Debug, Clone)]
pub struct StaticMealSuggester {
    meal: MealSuggestion,
}

impl StaticMealSuggester {
    pub fn new(meal: MealSuggestion) -> Self {
        Self { meal }
    }
}

impl Default for StaticMealSuggester {
    fn default() -> Self {
        Self::new(fallback_suggestion())
    }
}

#[async_trait]
impl MealSuggester for StaticMealSuggester {
    async fn suggest_meal(&self) -> MealSuggestion {
        self.meal.clone()
    }
}
