//! Shared types for the seating service
//!
//! Floor plan and availability models plus the unified error system,
//! used by the server and by any API client.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    MealSuggestion, SearchRequest, SearchResponse, TableInfo, TableLayoutUpdate,
    TableRecommendation, Zone,
};
pub use serde::{Deserialize, Serialize};
