//! PDF report generator for infrastructure drift-analysis results.
//!
//! Turns an [`da_model::AnalysisResult`] into a paginated PDF with five
//! fixed sections: title, analysis summary, impact assessment, per-drift
//! detail, and remediation guidance.
//!
//! # Design
//!
//! - **Two passes**: a pure layout pass produces a [`layout::ReportDocument`]
//!   of positioned blocks (inspectable in tests), then the `pdf` module
//!   renders it with built-in fonts
//! - **Explicit cursor**: pagination is a greedy top-down cursor scoped to
//!   one generation call; generators are safe to share across threads
//! - **Never fails**: [`ReportGenerator::generate`] always returns a valid
//!   PDF buffer, degrading to an error document on internal faults
//!
//! # Example
//!
//! ```
//! use da_model::AnalysisResult;
//! use da_report::{ReportConfig, ReportGenerator};
//!
//! let result = AnalysisResult::default();
//! let generator = ReportGenerator::new(ReportConfig::default());
//! let pdf = generator.generate(&result, "s3", "infra.tf");
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod pdf;
pub mod sections;

pub use config::{PageGeometry, Palette, ReportConfig};
pub use error::{ReportError, Result};
pub use generator::ReportGenerator;
pub use layout::{LayoutCursor, ReportDocument};
