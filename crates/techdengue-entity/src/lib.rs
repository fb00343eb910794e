//! # techdengue-entity
//!
//! Domain records for the TechDengue dashboard engine. Every struct in this
//! crate is either a persisted record (stored inside a snapshot) or the
//! creation/patch payload used to produce one. All of them derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`, with camelCase field names.

pub mod notification;
pub mod report;
