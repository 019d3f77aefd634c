//! Merge search: push adjacent free tables together for a large party
//!
//! Candidates are the free tables passing the zone filter. Every group of
//! 2..=4 candidates is tried, smaller groups first and lexicographically by
//! candidate position within a size. A group counts only if it is one
//! connected component under the adjacency rule and seats the party. The
//! best-scoring group wins; on equal scores the first one found is kept.

use std::collections::HashSet;

use shared::models::{SearchRequest, TableInfo, TableRecommendation, Zone};

use super::combination::Combinations;
use super::scoring::{NOTE_SEPARATOR, score_table};

/// Two tables can be pushed together when their centres are this close
pub const ADJACENCY_THRESHOLD: f64 = 190.0;
pub const MIN_GROUP_SIZE: usize = 2;
pub const MAX_GROUP_SIZE: usize = 4;
/// Bonus per join, i.e. `8 * (group size - 1)`
pub const MERGE_BONUS_PER_JOIN: f64 = 8.0;

pub fn is_adjacent(a: &TableInfo, b: &TableInfo) -> bool {
    // widen first: layout coordinates span the whole i32 range
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy) <= ADJACENCY_THRESHOLD
}

/// Whether every table in the group is reachable from the first one
/// through adjacent members of the group
pub fn is_connected(group: &[&TableInfo]) -> bool {
    if group.is_empty() {
        return false;
    }
    let mut visited = vec![false; group.len()];
    visited[0] = true;
    let mut frontier = vec![0usize];

    while let Some(current) = frontier.pop() {
        for (next, table) in group.iter().enumerate() {
            if !visited[next] && is_adjacent(group[current], table) {
                visited[next] = true;
                frontier.push(next);
            }
        }
    }
    visited.iter().all(|v| *v)
}

/// Virtual table standing for a pushed-together group
///
/// Id is the `+`-joined component ids, seats the sum, zone the first
/// component's, position the rounded centroid, amenities OR-ed.
pub fn merge_tables(group: &[&TableInfo]) -> TableInfo {
    let count = group.len().max(1) as f64;
    let centroid = |coord: fn(&TableInfo) -> i32| -> i32 {
        let sum: f64 = group.iter().map(|t| f64::from(coord(*t))).sum();
        // half-up rounding
        (sum / count + 0.5).floor() as i32
    };

    TableInfo {
        id: group
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join("+"),
        seats: group.iter().map(|t| t.seats).sum(),
        zone: group.first().map_or(Zone::Indoor, |t| t.zone),
        x: centroid(|t| t.x),
        y: centroid(|t| t.y),
        privacy: group.iter().any(|t| t.privacy),
        window: group.iter().any(|t| t.window),
        accessibility: group.iter().any(|t| t.accessibility),
        kids_area: group.iter().any(|t| t.kids_area),
    }
}

/// Score a connected group as if it were one free table
fn score_group(group: &[&TableInfo], request: &SearchRequest) -> TableRecommendation {
    let merged = merge_tables(group);
    let mut rec = score_table(&merged, request, false);
    let ids: Vec<String> = group.iter().map(|t| t.id.clone()).collect();

    rec.score += MERGE_BONUS_PER_JOIN * (group.len() - 1) as f64;
    rec.reason.push_str(NOTE_SEPARATOR);
    rec.reason.push_str("combined tables: ");
    rec.reason.push_str(&ids.join(" + "));
    rec.merged = true;
    rec.merged_table_ids = ids;
    rec
}

/// Best merged seating option, or `None` when no connected group of free
/// tables seats the party
pub fn find_merged_option(
    request: &SearchRequest,
    tables: &[TableInfo],
    occupied: &HashSet<String>,
) -> Option<TableRecommendation> {
    let candidates: Vec<&TableInfo> = tables
        .iter()
        .filter(|t| !occupied.contains(&t.id))
        .filter(|t| request.zone_allows(t))
        .collect();

    if candidates.len() < MIN_GROUP_SIZE {
        tracing::debug!(
            candidates = candidates.len(),
            "Not enough free tables to merge"
        );
        return None;
    }

    let mut best: Option<TableRecommendation> = None;
    let max_group = MAX_GROUP_SIZE.min(candidates.len());
    for size in MIN_GROUP_SIZE..=max_group {
        for indexes in Combinations::new(candidates.len(), size) {
            let group: Vec<&TableInfo> = indexes.iter().map(|&i| candidates[i]).collect();
            if !is_connected(&group) {
                continue;
            }
            let seats: u32 = group.iter().map(|t| t.seats).sum();
            if seats < request.party_size {
                continue;
            }
            let option = score_group(&group, request);
            if best.as_ref().is_none_or(|b| option.score > b.score) {
                best = Some(option);
            }
        }
    }

    match &best {
        Some(option) => tracing::debug!(
            tables = ?option.merged_table_ids,
            score = option.score,
            "Merged seating option found"
        ),
        None => tracing::debug!(
            party_size = request.party_size,
            "No connected group seats the party"
        ),
    }
    best
}
