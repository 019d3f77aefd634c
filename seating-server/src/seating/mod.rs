//! Seating engine
//!
//! Pure, synchronous table allocation: simulated occupancy, scoring,
//! merge search and the recommender that ties them together. Nothing in
//! here performs I/O apart from loading the catalog file.

pub mod catalog;
pub mod combination;
pub mod merge;
pub mod occupancy;
pub mod random;
pub mod recommender;
pub mod registry;
pub mod scoring;

pub use catalog::{CatalogError, default_catalog, load_catalog, validate_catalog};
pub use merge::{find_merged_option, is_adjacent, is_connected, merge_tables};
pub use occupancy::{is_occupied, occupied_tables};
pub use recommender::{ALGORITHM_INFO, Recommender};
pub use registry::TableRegistry;
pub use scoring::score_table;
