//! Shared types for the Ladle franchise hub
//!
//! Common types used by the hub server and its clients: domain models,
//! error types, response structures, and id/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
