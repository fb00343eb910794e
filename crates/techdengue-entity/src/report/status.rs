//! Report generation status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use techdengue_core::AppError;

/// Outcome of a report generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// The report was generated successfully.
    #[default]
    Done,
    /// Generation or export failed; see the record's `error` field.
    Error,
    /// Generation is still running.
    Processing,
}

impl ReportStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Error => "error",
            Self::Processing => "processing",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "done" => Ok(Self::Done),
            "error" => Ok(Self::Error),
            "processing" => Ok(Self::Processing),
            _ => Err(AppError::validation(format!(
                "Invalid report status: '{s}'. Expected one of: done, error, processing"
            ))),
        }
    }
}
