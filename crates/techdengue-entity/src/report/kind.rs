//! Report type and output format enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use techdengue_core::AppError;

/// Kind of report generated from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Municipal KPI report.
    Municipal,
    /// Field activities report.
    Activities,
    /// Breeding-site feedback report.
    Feedback,
    /// Executive summary.
    Executive,
}

impl ReportType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Municipal => "municipal",
            Self::Activities => "activities",
            Self::Feedback => "feedback",
            Self::Executive => "executive",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "municipal" => Ok(Self::Municipal),
            "activities" => Ok(Self::Activities),
            "feedback" => Ok(Self::Feedback),
            "executive" => Ok(Self::Executive),
            _ => Err(AppError::validation(format!(
                "Invalid report type: '{s}'. Expected one of: municipal, activities, feedback, executive"
            ))),
        }
    }
}

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    /// Rendered in the browser only, nothing downloadable.
    Preview,
}

impl ReportFormat {
    /// Return the format as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "excel" | "xlsx" => Ok(Self::Excel),
            "preview" => Ok(Self::Preview),
            _ => Err(AppError::validation(format!(
                "Invalid report format: '{s}'. Expected one of: pdf, excel, preview"
            ))),
        }
    }
}
