//! Convenience result type alias for TechDengue.

use crate::error::AppError;

/// A specialized `Result` type for TechDengue operations.
pub type AppResult<T> = Result<T, AppError>;
