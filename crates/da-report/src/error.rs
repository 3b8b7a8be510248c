//! Error types for report generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while composing or rendering a report.
///
/// None of these reach the caller of [`crate::ReportGenerator::generate`];
/// they are swallowed into the error-document path.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Page geometry cannot host any content.
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// PDF backend failure.
    #[error("PDF rendering failed: {0}")]
    Render(String),
}

impl From<printpdf::Error> for ReportError {
    fn from(err: printpdf::Error) -> Self {
        ReportError::Render(err.to_string())
    }
}
