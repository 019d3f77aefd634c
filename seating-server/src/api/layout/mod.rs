//! Floor layout API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/admin/layout | GET | current floor plan |
//! | /api/admin/layout | PUT | move tables, returns the new floor plan |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/admin/layout", get(handler::list).put(handler::update))
}
