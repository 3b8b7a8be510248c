//! Report section composition.
//!
//! Each module owns the pure statistics for one section plus its emission
//! into the shared [`crate::layout::LayoutEngine`]. Sections run in fixed
//! order: title, summary, impact, detail, remediation.

pub mod detail;
pub mod impact;
pub mod remediation;
pub mod summary;
pub mod title;

pub use detail::{drift_rows, remediation_text, should_break_after, DetailSection};
pub use impact::ImpactSection;
pub use remediation::RemediationSection;
pub use summary::{KindCount, SummarySection};
pub use title::TitleSection;
