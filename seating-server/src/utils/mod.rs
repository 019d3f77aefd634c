//! Utilities
//!
//! - [`AppError`] / [`AppResult`] - request errors (from shared::error)
//! - [`logger`] - tracing setup
//! - [`validation`] - boundary checks

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
