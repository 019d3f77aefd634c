//! Health check
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | liveness plus basic facts |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "tables": 10, "uptimeSeconds": 42 }
//! ```

use std::sync::OnceLock;
use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Tables in the floor plan
    tables: usize,
    uptime_seconds: u64,
}

// set on first health check or router build
static START_TIME: OnceLock<Instant> = OnceLock::new();

pub(crate) fn mark_started() {
    START_TIME.get_or_init(Instant::now);
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let started = START_TIME.get_or_init(Instant::now);
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        tables: state.registry.len(),
        uptime_seconds: started.elapsed().as_secs(),
    })
}
