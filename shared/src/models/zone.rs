//! Zone Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse seating area of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Indoor,
    Terrace,
    PrivateRoom,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Indoor, Zone::Terrace, Zone::PrivateRoom];

    /// Wire token (`INDOOR`, `TERRACE`, `PRIVATE_ROOM`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Indoor => "INDOOR",
            Zone::Terrace => "TERRACE",
            Zone::PrivateRoom => "PRIVATE_ROOM",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
