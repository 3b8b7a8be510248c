//! Analysis summary: totals, per-kind breakdown, severity tally.
//!
//! Statistics are always recomputed from the drift list; a caller-supplied
//! summary block is never trusted.

use crate::layout::LayoutEngine;
use da_model::{kind_info, DriftRecord, SeverityTally};

/// Count for one distinct kind, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindCount {
    pub kind: String,
    pub count: usize,
}

/// Computed summary statistics.
#[derive(Debug, Clone)]
pub struct SummarySection {
    pub total: usize,
    pub by_kind: Vec<KindCount>,
    pub severity: SeverityTally,
}

impl SummarySection {
    /// Compute statistics over the drift list.
    ///
    /// Breakdown rows keep the order in which each kind first appears.
    pub fn from_drifts(drifts: &[DriftRecord]) -> Self {
        let mut by_kind: Vec<KindCount> = Vec::new();
        for drift in drifts {
            match by_kind.iter_mut().find(|k| k.kind == drift.kind) {
                Some(entry) => entry.count += 1,
                None => by_kind.push(KindCount {
                    kind: drift.kind.clone(),
                    count: 1,
                }),
            }
        }
        Self {
            total: drifts.len(),
            by_kind,
            severity: SeverityTally::from_drifts(drifts),
        }
    }

    /// Text for the highlighted statistics box.
    pub fn stats_text(&self, resource_type: &str) -> String {
        format!(
            "Analysis Results:\n\
             - Total Issues Detected: {}\n\
             - High Priority Issues: {}\n\
             - Medium Priority Issues: {}\n\
             - Low Priority Issues: {}\n\
             - Resource Type Analyzed: {}",
            self.total,
            self.severity.high,
            self.severity.medium,
            self.severity.low,
            resource_type.to_uppercase()
        )
    }

    pub fn write(&self, eng: &mut LayoutEngine, resource_type: &str) {
        eng.section_header("Analysis Summary");

        if self.total == 0 {
            let success = eng.palette().success;
            eng.highlight_box(
                "Excellent News!\n\nNo infrastructure drift detected. Your cloud resources \
                 are perfectly aligned with your Infrastructure as Code (IaC) configuration.",
                success,
            );
            return;
        }

        let info = eng.palette().info;
        eng.highlight_box(&self.stats_text(resource_type), info);

        eng.subsection_header("Drift Type Breakdown");
        let rows: Vec<Vec<String>> = self
            .by_kind
            .iter()
            .map(|entry| {
                let info = kind_info(&entry.kind);
                vec![
                    format!("{} {}", info.icon, info.label),
                    entry.count.to_string(),
                    info.default_severity.label().to_string(),
                    info.description.into_owned(),
                ]
            })
            .collect();
        eng.table(
            &["Drift Type", "Count", "Severity", "Description"],
            &rows,
            &[30.0, 10.0, 15.0, 45.0],
        );
        eng.gap(15.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift(kind: &str) -> DriftRecord {
        DriftRecord {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_grouping_preserves_first_occurrence_order() {
        let drifts = vec![
            drift("orphaned"),
            drift("missing"),
            drift("orphaned"),
            drift("custom_kind"),
            drift("missing"),
        ];
        let section = SummarySection::from_drifts(&drifts);
        assert_eq!(section.total, 5);
        let kinds: Vec<&str> = section.by_kind.iter().map(|k| k.kind.as_str()).collect();
        assert_eq!(kinds, vec!["orphaned", "missing", "custom_kind"]);
        let counts: Vec<usize> = section.by_kind.iter().map(|k| k.count).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_row_count_equals_distinct_kinds() {
        let drifts = vec![drift("a"), drift("b"), drift("a"), drift("c"), drift("b")];
        let section = SummarySection::from_drifts(&drifts);
        assert_eq!(section.by_kind.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let section = SummarySection::from_drifts(&[]);
        assert_eq!(section.total, 0);
        assert!(section.by_kind.is_empty());
        assert_eq!(section.severity.total(), 0);
    }

    #[test]
    fn test_stats_text_upper_cases_resource_type() {
        let section = SummarySection::from_drifts(&[drift("missing")]);
        let text = section.stats_text("ec2");
        assert!(text.contains("Total Issues Detected: 1"));
        assert!(text.contains("High Priority Issues: 1"));
        assert!(text.contains("Resource Type Analyzed: EC2"));
    }
}
