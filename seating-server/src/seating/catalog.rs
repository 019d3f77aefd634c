//! Base table catalog
//!
//! The floor plan the venue opens with. Either the built-in ten-table
//! layout or a JSON array of [`TableInfo`] records loaded at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use shared::models::{TableInfo, Zone};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no tables")]
    Empty,

    #[error("duplicate table id: {0}")]
    DuplicateId(String),

    #[error("table {0} has no seats")]
    NoSeats(String),
}

#[allow(clippy::too_many_arguments)]
fn table(
    id: &str,
    seats: u32,
    zone: Zone,
    x: i32,
    y: i32,
    privacy: bool,
    window: bool,
    accessibility: bool,
    kids_area: bool,
) -> TableInfo {
    TableInfo {
        id: id.to_string(),
        seats,
        zone,
        x,
        y,
        privacy,
        window,
        accessibility,
        kids_area,
    }
}

/// Built-in floor plan, in declaration order
pub fn default_catalog() -> Vec<TableInfo> {
    vec![
        table("T1", 2, Zone::Indoor, 80, 90, true, true, true, false),
        table("T2", 2, Zone::Indoor, 200, 90, false, false, true, true),
        table("T3", 4, Zone::Indoor, 330, 90, false, true, true, false),
        table("T4", 4, Zone::Indoor, 470, 90, true, false, false, false),
        table("T5", 6, Zone::Indoor, 600, 90, false, false, true, true),
        table("T6", 2, Zone::Terrace, 100, 240, true, true, false, false),
        table("T7", 4, Zone::Terrace, 250, 240, false, true, false, false),
        table("T8", 6, Zone::Terrace, 420, 240, false, true, false, true),
        table("T9", 8, Zone::PrivateRoom, 590, 240, true, false, true, false),
        table("T10", 10, Zone::PrivateRoom, 360, 380, true, false, true, true),
    ]
}

/// Reject catalogs the engine cannot work with
pub fn validate_catalog(tables: &[TableInfo]) -> Result<(), CatalogError> {
    if tables.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::with_capacity(tables.len());
    for t in tables {
        if !seen.insert(t.id.as_str()) {
            return Err(CatalogError::DuplicateId(t.id.clone()));
        }
        if t.seats == 0 {
            return Err(CatalogError::NoSeats(t.id.clone()));
        }
    }
    Ok(())
}

/// Load and validate a JSON catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<TableInfo>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tables: Vec<TableInfo> = serde_json::from_str(&raw)?;
    validate_catalog(&tables)?;
    tracing::info!(path = %path.display(), tables = tables.len(), "Loaded table catalog");
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_is_valid() {
        let tables = default_catalog();
        assert_eq!(tables.len(), 10);
        assert!(validate_catalog(&tables).is_ok());

        let ids: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["T1", "T2", "T3", "T4", "T5", "T6", "T7", "T8", "T9", "T10"]);

        let t10 = &tables[9];
        assert_eq!(t10.seats, 10);
        assert_eq!(t10.zone, Zone::PrivateRoom);
        assert_eq!((t10.x, t10.y), (360, 380));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tables = default_catalog();
        tables.push(tables[0].clone());
        assert!(matches!(
            validate_catalog(&tables),
            Err(CatalogError::DuplicateId(id)) if id == "T1"
        ));
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut tables = default_catalog();
        tables[3].seats = 0;
        assert!(matches!(
            validate_catalog(&tables),
            Err(CatalogError::NoSeats(id)) if id == "T4"
        ));
        assert!(matches!(validate_catalog(&[]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id":"A","seats":4,"zone":"TERRACE","x":0,"y":0,
                  "privacy":false,"window":true,"accessibility":false,"kidsArea":false}},
                {{"id":"B","seats":2,"zone":"INDOOR","x":150,"y":0,
                  "privacy":true,"window":false,"accessibility":true,"kidsArea":true}}
            ]"#
        )
        .unwrap();

        let tables = load_catalog(file.path()).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].zone, Zone::Terrace);
        assert!(tables[1].kids_area);
    }

    #[test]
    fn test_load_catalog_errors() {
        let missing = load_catalog(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id":"A","seats":4}}]"#).unwrap();
        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }
}
