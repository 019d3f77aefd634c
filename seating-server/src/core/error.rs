use thiserror::Error;

use crate::seating::CatalogError;

/// Startup and lifecycle errors
///
/// Request-level failures use [`shared::error::AppError`]; these only
/// surface from [`crate::core::Server::run`] and state initialisation.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("table catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("failed to build meal service client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
