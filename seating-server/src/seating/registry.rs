//! Table registry
//!
//! Immutable base catalog plus a concurrent map of position overrides.
//! Overrides only ever move a table; id, seats, zone and amenities always
//! come from the base record. Each override is written and read atomically
//! per table id; a reader racing a multi-table update may see some tables
//! moved and others not yet.

use std::sync::Arc;

use dashmap::DashMap;
use shared::models::{TableInfo, TableLayoutUpdate};

#[derive(Debug)]
pub struct TableRegistry {
    base: Arc<[TableInfo]>,
    /// table id -> (x, y)
    overrides: DashMap<String, (i32, i32)>,
}

impl TableRegistry {
    /// Base catalog ids are expected to be unique (see `catalog::validate_catalog`)
    pub fn new(base: Vec<TableInfo>) -> Self {
        Self {
            base: base.into(),
            overrides: DashMap::new(),
        }
    }

    /// Effective floor plan, in base declaration order
    pub fn current_tables(&self) -> Vec<TableInfo> {
        self.base
            .iter()
            .map(|table| match self.overrides.get(&table.id) {
                Some(pos) => {
                    let (x, y) = *pos;
                    table.moved_to(x, y)
                }
                None => table.clone(),
            })
            .collect()
    }

    /// Move tables; unknown ids are skipped
    ///
    /// When the same id appears more than once the last entry wins.
    /// Returns the floor plan after the update.
    pub fn apply_layout_update(&self, updates: &[TableLayoutUpdate]) -> Vec<TableInfo> {
        let mut applied = 0usize;
        for update in updates {
            if !self.base.iter().any(|t| t.id == update.id) {
                tracing::debug!(id = %update.id, "Ignoring layout update for unknown table");
                continue;
            }
            self.overrides
                .insert(update.id.clone(), (update.x, update.y));
            applied += 1;
        }
        tracing::info!(
            requested = updates.len(),
            applied,
            "Table layout updated"
        );
        self.current_tables()
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::catalog::default_catalog;
    use std::thread;

    fn update(id: &str, x: i32, y: i32) -> TableLayoutUpdate {
        TableLayoutUpdate {
            id: id.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_current_tables_defaults_to_base() {
        let registry = TableRegistry::new(default_catalog());
        assert_eq!(registry.current_tables(), default_catalog());
        assert_eq!(registry.len(), 10);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_update_moves_only_coordinates() {
        let registry = TableRegistry::new(default_catalog());
        let tables = registry.apply_layout_update(&[update("T3", 10, 20)]);

        let t3 = tables.iter().find(|t| t.id == "T3").unwrap();
        let base = &default_catalog()[2];
        assert_eq!((t3.x, t3.y), (10, 20));
        assert_eq!(t3.seats, base.seats);
        assert_eq!(t3.zone, base.zone);
        assert_eq!(t3.window, base.window);

        // order preserved, other tables untouched
        let ids: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids[2], "T3");
        assert_eq!(tables[0], default_catalog()[0]);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let registry = TableRegistry::new(default_catalog());
        let tables = registry.apply_layout_update(&[update("T99", 1, 1), update("T1", 5, 5)]);
        assert_eq!(tables.len(), 10);
        assert!(tables.iter().all(|t| t.id != "T99"));
        assert_eq!((tables[0].x, tables[0].y), (5, 5));
    }

    #[test]
    fn test_updates_accumulate_and_replace() {
        let registry = TableRegistry::new(default_catalog());
        registry.apply_layout_update(&[update("T1", 1, 1)]);
        registry.apply_layout_update(&[update("T2", 2, 2)]);
        let tables = registry.apply_layout_update(&[update("T1", 3, 3), update("T1", 4, 4)]);

        assert_eq!((tables[0].x, tables[0].y), (4, 4));
        assert_eq!((tables[1].x, tables[1].y), (2, 2));
        assert_eq!(registry.current_tables(), tables);
    }

    #[test]
    fn test_concurrent_updates_and_reads() {
        let registry = Arc::new(TableRegistry::new(default_catalog()));
        let writers: Vec<_> = (0..4)
            .map(|w| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for i in 0..200 {
                        let id = format!("T{}", (i % 10) + 1);
                        registry.apply_layout_update(&[update(&id, w, i)]);
                    }
                })
            })
            .collect();
        let reader = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    let tables = registry.current_tables();
                    assert_eq!(tables.len(), 10);
                    for (table, base) in tables.iter().zip(default_catalog()) {
                        assert_eq!(table.id, base.id);
                        assert_eq!(table.seats, base.seats);
                    }
                }
            })
        };
        for handle in writers {
            handle.join().unwrap();
        }
        reader.join().unwrap();
        assert_eq!(registry.current_tables().len(), 10);
    }
}
