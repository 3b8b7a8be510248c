//! Severity buckets and the fixed derivation rule.
//!
//! Backends report severity as free text. The report folds everything into
//! three buckets: `high`/`critical` map to High, `medium`/`moderate` map to
//! Medium, and any other explicit value maps to Low. When no severity is
//! reported, the bucket is derived from the drift kind.

use crate::record::DriftRecord;
use serde::{Deserialize, Serialize};

/// Report severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Derive the bucket for a drift record.
    ///
    /// An explicit non-empty `severity` string wins over the kind mapping.
    pub fn for_drift(record: &DriftRecord) -> Severity {
        if let Some(reported) = record.severity.as_deref().filter(|s| !s.is_empty()) {
            return match reported.to_lowercase().as_str() {
                "high" | "critical" => Severity::High,
                "medium" | "moderate" => Severity::Medium,
                _ => Severity::Low,
            };
        }
        Severity::for_kind(&record.kind)
    }

    /// Default bucket for a drift kind.
    pub fn for_kind(kind: &str) -> Severity {
        match kind {
            "missing" | "error" => Severity::High,
            "orphaned" | "configuration_drift" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-bucket drift counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTally {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityTally {
    /// Tally derived severities over a sequence of drifts.
    pub fn from_drifts(drifts: &[DriftRecord]) -> Self {
        let mut tally = SeverityTally::default();
        for drift in drifts {
            tally.count(Severity::for_drift(drift));
        }
        tally
    }

    /// Add one drift to the tally.
    pub fn count(&mut self, severity: Severity) {
        match severity {
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    /// Total across all buckets.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift(kind: &str, severity: Option<&str>) -> DriftRecord {
        DriftRecord {
            kind: kind.to_string(),
            severity: severity.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_severity_wins_over_kind() {
        // "critical" is High even for a kind that would derive Medium.
        assert_eq!(
            Severity::for_drift(&drift("orphaned", Some("critical"))),
            Severity::High
        );
        assert_eq!(
            Severity::for_drift(&drift("missing", Some("moderate"))),
            Severity::Medium
        );
    }

    #[test]
    fn test_unrecognized_explicit_severity_is_low() {
        // The three-bucket mapping is a catch-all; "urgent" is not High.
        assert_eq!(
            Severity::for_drift(&drift("missing", Some("urgent"))),
            Severity::Low
        );
    }

    #[test]
    fn test_empty_severity_falls_back_to_kind() {
        assert_eq!(
            Severity::for_drift(&drift("missing", Some(""))),
            Severity::High
        );
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(Severity::for_drift(&drift("missing", None)), Severity::High);
        assert_eq!(Severity::for_drift(&drift("error", None)), Severity::High);
        assert_eq!(
            Severity::for_drift(&drift("orphaned", None)),
            Severity::Medium
        );
        assert_eq!(
            Severity::for_drift(&drift("configuration_drift", None)),
            Severity::Medium
        );
        assert_eq!(
            Severity::for_drift(&drift("something_new", None)),
            Severity::Low
        );
    }

    #[test]
    fn test_tally() {
        let drifts = vec![
            drift("missing", None),
            drift("orphaned", None),
            drift("weird", None),
            drift("weird", Some("critical")),
        ];
        let tally = SeverityTally::from_drifts(&drifts);
        assert_eq!(
            tally,
            SeverityTally {
                high: 2,
                medium: 1,
                low: 1
            }
        );
        assert_eq!(tally.total(), 4);
    }
}
