//! DriftAssist shared types.
//!
//! This crate provides the data model exchanged between the drift-analysis
//! backend and the report builder:
//! - Drift records and analysis results (wire-compatible JSON)
//! - Severity buckets and the fixed derivation rule
//! - The drift-kind catalog with a generic fallback entry
//! - JSON value helpers for optional display fields

pub mod kind;
pub mod record;
pub mod severity;
pub mod value;

pub use kind::{kind_info, KindInfo};
pub use record::{AnalysisMetadata, AnalysisResult, AnalysisSummary, DriftRecord};
pub use severity::{Severity, SeverityTally};
pub use value::{is_truthy, value_text};
