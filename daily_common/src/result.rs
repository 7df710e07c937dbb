//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `DailyError`, so functions can simply return `Result<T>`.
use crate::error::DailyError;

/// Workspace-wide `Result` alias with `DailyError` as the default error.
pub type Result<T, E = DailyError> = std::result::Result<T, E>;
