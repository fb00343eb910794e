//! Report history domain entities.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::{ReportFormat, ReportType};
pub use model::{NewReport, ReportFilters, ReportHistoryRecord, ReportPatch};
pub use status::ReportStatus;
