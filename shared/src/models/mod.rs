//! Data models
//!
//! Shared between seating-server and API clients. JSON field names are
//! camelCase; zones serialize as `INDOOR` / `TERRACE` / `PRIVATE_ROOM`.

pub mod dining_table;
pub mod meal;
pub mod search;
pub mod zone;

// Re-exports
pub use dining_table::*;
pub use meal::*;
pub use search::*;
pub use zone::*;
