//! Table scoring
//!
//! score = 100 - 12 per empty seat, +35 per requested amenity the table
//! has, -15 per requested amenity it lacks, +10 when the zone filter
//! matches. Occupied or too-small tables get [`INELIGIBLE_SCORE`].

use shared::models::{INELIGIBLE_SCORE, SearchRequest, TableInfo, TableRecommendation};

pub const BASE_SCORE: f64 = 100.0;
pub const EMPTY_SEAT_PENALTY: f64 = 12.0;
pub const PREFERENCE_MATCH_BONUS: f64 = 35.0;
pub const PREFERENCE_MISMATCH_PENALTY: f64 = -15.0;
pub const ZONE_MATCH_BONUS: f64 = 10.0;

pub const REASON_OCCUPIED: &str = "occupied at requested time";
pub const REASON_TOO_SMALL: &str = "table too small";

/// Separator between the fit statement and the preference notes
pub const NOTE_SEPARATOR: &str = " · ";

/// Score one table (real or merged) for the request
///
/// The returned entry is never merged and never recommended; the
/// recommender decides both.
pub fn score_table(
    table: &TableInfo,
    request: &SearchRequest,
    occupied: bool,
) -> TableRecommendation {
    if occupied {
        return ineligible(table, true, REASON_OCCUPIED);
    }
    if table.seats < request.party_size {
        return ineligible(table, false, REASON_TOO_SMALL);
    }

    let empty_seats = table.seats - request.party_size;
    let mut score = BASE_SCORE - f64::from(empty_seats) * EMPTY_SEAT_PENALTY;
    let mut notes: Vec<String> = Vec::new();

    let preferences = [
        (request.privacy, table.privacy, "privacy"),
        (request.window, table.window, "window"),
        (request.accessibility, table.accessibility, "accessible"),
        (request.kids_area, table.kids_area, "near kids area"),
    ];
    for (requested, supported, label) in preferences {
        score += preference_adjustment(requested, supported, label, &mut notes);
    }

    if request.zone == Some(table.zone) {
        score += ZONE_MATCH_BONUS;
        notes.push("zone matches".to_string());
    }

    let mut reason = format!(
        "fits {} guests; {} empty seats",
        request.party_size, empty_seats
    );
    if !notes.is_empty() {
        reason.push_str(NOTE_SEPARATOR);
        reason.push_str(&notes.join(", "));
    }

    TableRecommendation {
        table: table.clone(),
        occupied: false,
        recommended: false,
        score,
        reason,
        merged: false,
        merged_table_ids: Vec::new(),
    }
}

fn preference_adjustment(
    requested: bool,
    supported: bool,
    label: &str,
    notes: &mut Vec<String>,
) -> f64 {
    if !requested {
        return 0.0;
    }
    if supported {
        notes.push(format!("{label} ✓"));
        PREFERENCE_MATCH_BONUS
    } else {
        notes.push(format!("{label} ✕"));
        PREFERENCE_MISMATCH_PENALTY
    }
}

fn ineligible(table: &TableInfo, occupied: bool, reason: &str) -> TableRecommendation {
    TableRecommendation {
        table: table.clone(),
        occupied,
        recommended: false,
        score: INELIGIBLE_SCORE,
        reason: reason.to_string(),
        merged: false,
        merged_table_ids: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::Zone;

    fn table(seats: u32, privacy: bool, window: bool, accessibility: bool, kids: bool) -> TableInfo {
        TableInfo {
            id: "T".into(),
            seats,
            zone: Zone::Indoor,
            x: 0,
            y: 0,
            privacy,
            window,
            accessibility,
            kids_area: kids,
        }
    }

    fn request(party_size: u32) -> SearchRequest {
        let at = NaiveDate::from_ymd_opt(2026, 3, 10)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();
        SearchRequest::new(at, party_size)
    }

    #[test]
    fn test_occupied_is_ineligible() {
        let rec = score_table(&table(4, true, true, true, true), &request(2), true);
        assert!(rec.occupied);
        assert_eq!(rec.score, INELIGIBLE_SCORE);
        assert_eq!(rec.reason, REASON_OCCUPIED);
        assert!(!rec.recommended);
        assert!(!rec.merged);
    }

    #[test]
    fn test_too_small_is_ineligible() {
        let rec = score_table(&table(2, false, false, false, false), &request(3), false);
        assert!(!rec.occupied);
        assert_eq!(rec.score, INELIGIBLE_SCORE);
        assert_eq!(rec.reason, REASON_TOO_SMALL);
    }

    #[test]
    fn test_exact_fit_scores_base() {
        let rec = score_table(&table(4, false, false, false, false), &request(4), false);
        assert_eq!(rec.score, 100.0);
        assert_eq!(rec.reason, "fits 4 guests; 0 empty seats");
        assert!(rec.merged_table_ids.is_empty());
    }

    #[test]
    fn test_empty_seats_penalised() {
        let rec = score_table(&table(6, false, false, false, false), &request(2), false);
        assert_eq!(rec.score, 100.0 - 4.0 * 12.0);
        assert_eq!(rec.reason, "fits 2 guests; 4 empty seats");
    }

    #[test]
    fn test_score_can_go_negative_but_stays_eligible() {
        let rec = score_table(&table(10, false, false, false, false), &request(1), false);
        assert_eq!(rec.score, 100.0 - 9.0 * 12.0);
        assert!(rec.is_eligible());
    }

    #[test]
    fn test_preferences_in_fixed_order() {
        let mut req = request(2);
        req.privacy = true;
        req.window = true;
        req.accessibility = true;
        req.kids_area = true;
        let rec = score_table(&table(2, true, false, true, false), &req, false);
        assert_eq!(rec.score, 100.0 + 35.0 - 15.0 + 35.0 - 15.0);
        assert_eq!(
            rec.reason,
            "fits 2 guests; 0 empty seats · privacy ✓, window ✕, accessible ✓, near kids area ✕"
        );
    }

    #[test]
    fn test_zone_bonus() {
        let req = request(2).with_zone(Some(Zone::Indoor));
        let rec = score_table(&table(2, false, false, false, false), &req, false);
        assert_eq!(rec.score, 110.0);
        assert_eq!(rec.reason, "fits 2 guests; 0 empty seats · zone matches");

        let req = request(2).with_zone(Some(Zone::Terrace));
        let rec = score_table(&table(2, false, false, false, false), &req, false);
        assert_eq!(rec.score, 100.0);
    }

    #[test]
    fn test_single_preference_toggle_delta() {
        type Flag = fn(&mut SearchRequest);
        let flags: [(Flag, [bool; 4]); 4] = [
            (|r: &mut SearchRequest| r.privacy = true, [true, false, false, false]),
            (|r: &mut SearchRequest| r.window = true, [false, true, false, false]),
            (|r: &mut SearchRequest| r.accessibility = true, [false, false, true, false]),
            (|r: &mut SearchRequest| r.kids_area = true, [false, false, false, true]),
        ];
        let base = request(3);

        for (set_flag, [p, w, a, k]) in flags {
            let mut toggled = request(3);
            set_flag(&mut toggled);
            let with_amenity = table(4, p, w, a, k);
            let without_amenity = table(4, false, false, false, false);

            for (t, delta) in [(&with_amenity, 35.0), (&without_amenity, -15.0)] {
                let before = score_table(t, &base, false).score;
                let after = score_table(t, &toggled, false).score;
                assert_eq!(after - before, delta, "{toggled:?}");
            }
        }
    }
}
