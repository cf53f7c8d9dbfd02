//! Utility module
//!
//! - error types re-exported from `shared::error`
//! - logging setup

pub mod logger;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
