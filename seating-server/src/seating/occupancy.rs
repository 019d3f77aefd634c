//! Occupancy simulation
//!
//! No real bookings exist; each table gets a pseudo-random reservation
//! timeline per calendar day, seeded from the date and the table id. The
//! same `(table id, date)` always yields the same timeline.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use shared::models::TableInfo;

use super::random::{SeededRandom, stable_hash};

/// First seating of the day starts at 12:00 plus up to this many minutes
const OPENING_JITTER_MINUTES: u32 = 40;
/// Reservations per table per day are drawn from `1..=MAX_RESERVATIONS`
const MAX_RESERVATIONS: u32 = 4;
const MIN_STAY_MINUTES: u32 = 120;
const MAX_STAY_MINUTES: u32 = 180;
/// Turnover gap between two parties, drawn from `[25, 95)`
const MIN_GAP_MINUTES: u32 = 25;
const GAP_SPREAD_MINUTES: u32 = 70;
/// No new seating once the cursor reaches this hour
const LAST_SEATING_HOUR: u32 = 23;
/// `num_days_from_ce` of 1970-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// One simulated reservation, occupying `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Reservation {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// Lazily generated reservations of one table on one day
///
/// Draw order per table: opening jitter, reservation count, then for each
/// reservation its stay length followed (when another one is requested) by
/// the turnover gap.
#[derive(Debug, Clone)]
pub struct ReservationTimeline {
    rng: SeededRandom,
    cursor: NaiveDateTime,
    remaining: u32,
    last_end: Option<NaiveDateTime>,
}

impl ReservationTimeline {
    pub fn new(table_id: &str, date: NaiveDate) -> Self {
        let mut rng = SeededRandom::new(day_seed(table_id, date));
        let opening = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
        let cursor =
            opening + Duration::minutes(i64::from(rng.next_below(OPENING_JITTER_MINUTES)));
        let remaining = 1 + rng.next_below(MAX_RESERVATIONS);
        Self {
            rng,
            cursor,
            remaining,
            last_end: None,
        }
    }
}

impl Iterator for ReservationTimeline {
    type Item = Reservation;

    fn next(&mut self) -> Option<Reservation> {
        if let Some(end) = self.last_end.take() {
            let gap = MIN_GAP_MINUTES + self.rng.next_below(GAP_SPREAD_MINUTES);
            self.cursor = end + Duration::minutes(i64::from(gap));
            if self.cursor.hour() >= LAST_SEATING_HOUR {
                self.remaining = 0;
            }
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let stay = self.rng.next_in(MIN_STAY_MINUTES, MAX_STAY_MINUTES);
        let reservation = Reservation {
            start: self.cursor,
            end: self.cursor + Duration::minutes(i64::from(stay)),
        };
        self.last_end = Some(reservation.end);
        Some(reservation)
    }
}

/// Seed for a table's timeline: `epoch_day * 31 + hash(id)`
fn day_seed(table_id: &str, date: NaiveDate) -> i64 {
    let epoch_day = i64::from(date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE);
    epoch_day
        .wrapping_mul(31)
        .wrapping_add(i64::from(stable_hash(table_id)))
}

/// Whether the table has a simulated party seated at `at`
///
/// Stops generating the timeline at the first reservation covering `at`.
pub fn is_occupied(table_id: &str, at: NaiveDateTime) -> bool {
    ReservationTimeline::new(table_id, at.date()).any(|r| r.contains(at))
}

/// Ids of every table occupied at `at`
pub fn occupied_tables(tables: &[TableInfo], at: NaiveDateTime) -> HashSet<String> {
    let occupied: HashSet<String> = tables
        .iter()
        .filter(|table| is_occupied(&table.id, at))
        .map(|table| table.id.clone())
        .collect();
    tracing::debug!(
        at = %at,
        occupied = occupied.len(),
        total = tables.len(),
        "Simulated occupancy"
    );
    occupied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::catalog::default_catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_day_seed_formula() {
        assert_eq!(day_seed("T1", date(1970, 1, 1)), 2653);
        assert_eq!(day_seed("T1", date(1970, 1, 2)), 31 + 2653);
        assert_eq!(day_seed("T10", date(2026, 3, 10)), 20_522 * 31 + 82_291);
        assert_eq!(day_seed("T1", date(1969, 12, 31)), -31 + 2653);
    }

    #[test]
    fn test_timeline_shape() {
        for table in default_catalog() {
            for day in 1..=28 {
                let d = date(2026, 2, day);
                let noon = d.and_hms_opt(12, 0, 0).unwrap();
                let reservations: Vec<Reservation> =
                    ReservationTimeline::new(&table.id, d).collect();

                assert!(!reservations.is_empty());
                assert!(reservations.len() <= MAX_RESERVATIONS as usize);

                let first = reservations[0];
                assert!(first.start >= noon);
                assert!(first.start < noon + Duration::minutes(40));

                for r in &reservations {
                    let stay = (r.end - r.start).num_minutes();
                    assert!((120..=180).contains(&stay), "stay {stay}");
                }
                for pair in reservations.windows(2) {
                    let gap = (pair[1].start - pair[0].end).num_minutes();
                    assert!((25..95).contains(&gap), "gap {gap}");
                    assert!(pair[1].start.hour() < LAST_SEATING_HOUR);
                }
            }
        }
    }

    #[test]
    fn test_timeline_is_reproducible() {
        let a: Vec<Reservation> = ReservationTimeline::new("T5", date(2026, 3, 10)).collect();
        let b: Vec<Reservation> = ReservationTimeline::new("T5", date(2026, 3, 10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_occupied_matches_timeline() {
        let d = date(2026, 3, 10);
        for table in default_catalog() {
            let reservations: Vec<Reservation> = ReservationTimeline::new(&table.id, d).collect();
            let first = reservations[0];

            assert!(is_occupied(&table.id, first.start));
            assert!(is_occupied(&table.id, first.end - Duration::minutes(1)));
            // before opening nobody is seated
            assert!(!is_occupied(&table.id, at(2026, 3, 10, 11, 59)));
        }
    }

    #[test]
    fn test_interval_is_half_open() {
        let r = Reservation {
            start: at(2026, 3, 10, 12, 0),
            end: at(2026, 3, 10, 14, 0),
        };
        assert!(r.contains(at(2026, 3, 10, 12, 0)));
        assert!(r.contains(at(2026, 3, 10, 13, 59)));
        assert!(!r.contains(at(2026, 3, 10, 14, 0)));
    }

    #[test]
    fn test_occupied_tables_deterministic() {
        let tables = default_catalog();
        let when = at(2026, 3, 10, 19, 0);
        assert_eq!(occupied_tables(&tables, when), occupied_tables(&tables, when));
    }

    #[test]
    fn test_occupied_tables_reference_state() {
        let tables = default_catalog();
        let sorted = |when: NaiveDateTime| {
            let mut ids: Vec<String> = occupied_tables(&tables, when).into_iter().collect();
            ids.sort();
            ids
        };

        assert!(sorted(at(2026, 3, 10, 19, 0)).is_empty());
        assert_eq!(sorted(at(2026, 3, 10, 20, 30)), ["T3", "T4", "T6", "T7"]);
        assert_eq!(
            sorted(at(2026, 3, 10, 17, 0)),
            ["T10", "T2", "T3", "T4", "T6", "T7", "T9"]
        );
    }

    #[test]
    fn test_reference_timeline_t3() {
        let starts: Vec<(u32, u32)> = ReservationTimeline::new("T3", date(2026, 3, 10))
            .map(|r| (r.start.hour(), r.start.minute()))
            .collect();
        // the last seating rolls past midnight and never matches the same day
        assert_eq!(starts, [(12, 25), (16, 23), (20, 0), (0, 4)]);
    }
}
