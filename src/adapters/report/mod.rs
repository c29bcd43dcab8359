//! Report rendering adapters
//!
//! Turn a `ComparisonReport` into text for the terminal or JSON for tooling,
//! and list what the loaded reference data offers.

mod listing;
mod text;

pub use listing::render_listing;
pub use text::render_text;

use std::str::FromStr;

use crate::application::ComparisonReport;

/// Errors that can occur while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),
}

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Renders the report in this format
    pub fn render(&self, report: &ComparisonReport) -> Result<String, RenderError> {
        match self {
            ReportFormat::Text => Ok(render_text(report)),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| RenderError::SerializationFailed(e.to_string())),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}
