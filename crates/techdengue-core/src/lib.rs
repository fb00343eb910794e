//! # techdengue-core
//!
//! Core crate for the TechDengue surveillance dashboard engine. Contains
//! the unified error system, configuration schemas, the clock and snapshot
//! storage traits, and record identifier generation.
//!
//! This crate has **no** internal dependencies on other TechDengue crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
