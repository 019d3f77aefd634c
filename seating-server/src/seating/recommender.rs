//! Recommendation orchestration
//!
//! 1. Resolve the floor plan and the simulated occupancy
//! 2. Score every table passing the zone filter, free tables first, best first
//! 3. Pick the best single table that seats the party
//! 4. Without one (and without an exact-capacity table in the zone), search
//!    for a merged group and put it at the top
//! 5. Mark exactly that one entry recommended

use std::sync::Arc;

use shared::models::{MealSuggestion, SearchRequest, SearchResponse, TableRecommendation};

use super::merge::find_merged_option;
use super::occupancy::occupied_tables;
use super::registry::TableRegistry;
use super::scoring::score_table;

/// Human-readable summary of the ranking policy, sent with every response
pub const ALGORITHM_INFO: &str = "Score = fit to party size + preference bonuses/penalties. \
If no single table fits, adjacent tables that can be pushed together are checked. \
Occupancy assumes a visit lasts about 2-3 hours.";

#[derive(Debug, Clone)]
pub struct Recommender {
    registry: Arc<TableRegistry>,
}

impl Recommender {
    pub fn new(registry: Arc<TableRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<TableRegistry> {
        &self.registry
    }

    /// Ranked and marked entries for the request
    pub fn rank(&self, request: &SearchRequest) -> Vec<TableRecommendation> {
        let tables = self.registry.current_tables();
        let occupied = occupied_tables(&tables, request.date_time);

        let mut ranked: Vec<TableRecommendation> = tables
            .iter()
            .filter(|t| request.zone_allows(t))
            .map(|t| score_table(t, request, occupied.contains(&t.id)))
            .collect();
        ranked.sort_by(|a, b| {
            a.occupied
                .cmp(&b.occupied)
                .then_with(|| b.score.total_cmp(&a.score))
        });

        // first of the top-scoring free tables that seat the party
        let best_single = ranked
            .iter()
            .filter(|r| !r.occupied && r.table.seats >= request.party_size)
            .reduce(|best, r| if r.score > best.score { r } else { best })
            .map(|r| r.table.id.clone());

        let has_exact_capacity = tables
            .iter()
            .filter(|t| request.zone_allows(t))
            .any(|t| t.seats == request.party_size);

        let mut merged_ids: Option<Vec<String>> = None;
        if best_single.is_none() && request.party_size > 1 && !has_exact_capacity {
            tracing::debug!(
                party_size = request.party_size,
                zone = ?request.zone,
                "No single table fits, searching merged groups"
            );
            if let Some(option) = find_merged_option(request, &tables, &occupied) {
                merged_ids = Some(option.merged_table_ids.clone());
                ranked.insert(0, option);
            }
        }

        for entry in &mut ranked {
            entry.recommended = match (&best_single, &merged_ids) {
                (Some(id), _) => entry.table.id == *id,
                (None, Some(ids)) => entry.merged && entry.merged_table_ids == *ids,
                (None, None) => false,
            };
        }

        tracing::debug!(
            at = %request.date_time,
            party_size = request.party_size,
            entries = ranked.len(),
            occupied = occupied.len(),
            recommended = ?ranked.iter().find(|r| r.recommended).map(|r| &r.table.id),
            "Ranked tables"
        );
        ranked
    }

    /// Full response; the meal suggestion is resolved by the caller
    pub fn recommend(
        &self,
        request: SearchRequest,
        meal_suggestion: MealSuggestion,
    ) -> SearchResponse {
        let tables = self.rank(&request);
        SearchResponse {
            request,
            tables,
            algorithm_info: ALGORITHM_INFO.to_string(),
            meal_suggestion,
        }
    }
}
