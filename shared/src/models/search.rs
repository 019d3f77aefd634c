//! Availability search models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{MealSuggestion, TableInfo, Zone};

/// Score assigned to tables that cannot seat the party
pub const INELIGIBLE_SCORE: f64 = -1.0;

/// Availability query: when, how many, and what the party would like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub date_time: NaiveDateTime,
    pub party_size: u32,
    pub zone: Option<Zone>,
    pub privacy: bool,
    pub window: bool,
    pub accessibility: bool,
    pub kids_area: bool,
}

impl SearchRequest {
    /// Request with every preference off and no zone filter
    pub fn new(date_time: NaiveDateTime, party_size: u32) -> Self {
        Self {
            date_time,
            party_size,
            zone: None,
            privacy: false,
            window: false,
            accessibility: false,
            kids_area: false,
        }
    }

    pub fn with_zone(mut self, zone: Option<Zone>) -> Self {
        self.zone = zone;
        self
    }

    /// Whether `table` passes the zone filter (always true without one)
    pub fn zone_allows(&self, table: &TableInfo) -> bool {
        self.zone.is_none_or(|zone| table.zone == zone)
    }
}

/// One ranked entry of an availability response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecommendation {
    pub table: TableInfo,
    pub occupied: bool,
    pub recommended: bool,
    /// [`INELIGIBLE_SCORE`] when occupied or too small
    pub score: f64,
    pub reason: String,
    pub merged: bool,
    /// Component ids of a merged entry, empty otherwise
    pub merged_table_ids: Vec<String>,
}

impl TableRecommendation {
    pub fn is_eligible(&self) -> bool {
        self.score != INELIGIBLE_SCORE
    }
}

/// Full availability response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub request: SearchRequest,
    pub tables: Vec<TableRecommendation>,
    pub algorithm_info: String,
    pub meal_suggestion: MealSuggestion,
}

impl SearchResponse {
    /// The entry marked recommended, if any
    pub fn recommended(&self) -> Option<&TableRecommendation> {
        self.tables.iter().find(|t| t.recommended)
    }
}
