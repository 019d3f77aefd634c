//! Dining Table Model

use serde::{Deserialize, Serialize};

use super::Zone;

/// A physical (or merged virtual) table on the floor plan
///
/// Coordinates are floor-plan units; two tables within 190 units of each
/// other can be pushed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub id: String,
    pub seats: u32,
    pub zone: Zone,
    pub x: i32,
    pub y: i32,
    pub privacy: bool,
    pub window: bool,
    pub accessibility: bool,
    pub kids_area: bool,
}

impl TableInfo {
    /// Same table moved to `(x, y)`
    pub fn moved_to(&self, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }
}

/// Layout update payload: new coordinates for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayoutUpdate {
    pub id: String,
    pub x: i32,
    pub y: i32,
}
