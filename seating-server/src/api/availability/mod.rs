//! Availability API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/availability | GET | ranked tables for a party at a date-time |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::AvailabilityQuery;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/availability", get(handler::search))
}
