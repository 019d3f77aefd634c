//! Availability API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use shared::models::{SearchRequest, SearchResponse, Zone};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{parse_date_time, validate_party_size};

const DEFAULT_PARTY_SIZE: u32 = 2;

/// Query string of `GET /api/availability`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date_time: String,
    pub party_size: Option<u32>,
    pub zone: Option<Zone>,
    #[serde(default)]
    pub privacy: bool,
    #[serde(default)]
    pub window: bool,
    #[serde(default)]
    pub accessibility: bool,
    #[serde(default)]
    pub kids_area: bool,
}

impl AvailabilityQuery {
    fn into_request(self) -> AppResult<SearchRequest> {
        let date_time = parse_date_time(&self.date_time)?;
        let party_size = validate_party_size(self.party_size.unwrap_or(DEFAULT_PARTY_SIZE))?;
        Ok(SearchRequest {
            date_time,
            party_size,
            zone: self.zone,
            privacy: self.privacy,
            window: self.window,
            accessibility: self.accessibility,
            kids_area: self.kids_area,
        })
    }
}

/// GET /api/availability - rank tables for a party
///
/// Malformed query strings (missing `dateTime`, unknown zone, negative
/// sizes) are reported like every other validation failure.
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let request = query.into_request()?;
    let meal = state.meal_suggester.suggest_meal().await;
    let response = state.recommender.recommend(request, meal);

    tracing::debug!(
        party_size = response.request.party_size,
        recommended = ?response.recommended().map(|r| &r.table.id),
        "Availability search served"
    );
    Ok(Json(response))
}
