//! External collaborators

pub mod meal_suggestion;

pub use meal_suggestion::{
    MealSuggester, StaticMealSuggester, TheMealDbSuggester, fallback_suggestion,
};
