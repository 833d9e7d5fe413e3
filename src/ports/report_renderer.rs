//! Report Renderer Port - printable form of the scorecard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::contract::ScorecardView;

/// Port for rendering a scorecard into a printable document.
///
/// Implementations must produce a self-contained document: a reader needs
/// nothing else to print it.
pub trait ReportRenderer: Send + Sync {
    /// Markdown source of the report.
    fn to_markdown(&self, view: &ScorecardView) -> String;

    /// Complete HTML page (with `<html>`, `<head>`, `<body>` tags).
    fn to_html(&self, view: &ScorecardView) -> String;

    fn render(&self, view: &ScorecardView, format: ExportFormat) -> String {
        match format {
            ExportFormat::Markdown => self.to_markdown(view),
            ExportFormat::Html => self.to_html(view),
        }
    }
}

/// Export formats supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw markdown.
    Markdown,
    /// Printable HTML page.
    #[default]
    Html,
}

impl ExportFormat {
    /// MIME type for HTTP responses.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Markdown => f.write_str("markdown"),
            ExportFormat::Html => f.write_str("html"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!("unsupported export format '{}'", other)),
        }
    }
}
