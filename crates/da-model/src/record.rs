//! Drift records and analysis results.
//!
//! Field names follow the backend wire format: the discriminator is `type`,
//! optional values use snake_case. All optional fields default so partial
//! payloads from older backends still deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One detected discrepancy between declared IaC and observed cloud state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriftRecord {
    /// Drift kind discriminator. Open set; unrecognized kinds are rendered
    /// generically, never rejected.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Ordered `[resource_type, resource_name, resource_id]` triple. The
    /// backend may send fewer than three entries.
    #[serde(default)]
    pub resource: Vec<String>,
    /// Free-text description of the discrepancy.
    #[serde(default)]
    pub details: String,
    /// Declared value, meaningful for `configuration_drift` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value: Option<Value>,
    /// Observed value, meaningful for `configuration_drift` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Value>,
    /// Name of the differing attribute, for `configuration_drift`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Backend-reported severity. Absent or empty means "derive from kind".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl DriftRecord {
    /// Non-empty resource element at `index`, if present.
    pub fn resource_field(&self, index: usize) -> Option<&str> {
        self.resource
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Resource name (`resource[1]`) used by remediation templates.
    pub fn resource_name(&self) -> &str {
        self.resource_field(1).unwrap_or("unknown")
    }

    /// Whether the resource triple is complete enough for the resource rows.
    ///
    /// Strict length check, matching the analysis backend contract: a record
    /// with two entries renders no resource rows at all.
    pub fn has_resource_triple(&self) -> bool {
        self.resource.len() >= 3
    }
}

/// Caller-supplied summary block. Deserialized for wire fidelity but never
/// trusted: the report recomputes every statistic from `drifts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub total_drifts: u64,
    #[serde(default)]
    pub drift_types: HashMap<String, u64>,
    #[serde(default)]
    pub severity_distribution: HashMap<String, u64>,
}

/// Caller-supplied metadata block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub analysis_timestamp: String,
}

/// Top-level input to report generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected drifts in detection order. Order is preserved in the report.
    #[serde(default)]
    pub drifts: Vec<DriftRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<AnalysisSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drift_record_wire_format() {
        let record: DriftRecord = serde_json::from_value(json!({
            "type": "configuration_drift",
            "resource": ["aws_instance", "web", "i-0abc"],
            "details": "instance_type differs",
            "expected_value": "t2.micro",
            "actual_value": "t3.large",
            "attribute": "instance_type",
            "severity": "high"
        }))
        .unwrap();

        assert_eq!(record.kind, "configuration_drift");
        assert_eq!(record.resource.len(), 3);
        assert_eq!(record.attribute.as_deref(), Some("instance_type"));
    }

    #[test]
    fn test_partial_payload_deserializes() {
        let record: DriftRecord =
            serde_json::from_value(json!({ "type": "missing" })).unwrap();
        assert_eq!(record.kind, "missing");
        assert!(record.resource.is_empty());
        assert!(record.details.is_empty());
        assert!(record.severity.is_none());
    }

    #[test]
    fn test_resource_field_skips_empty() {
        let record = DriftRecord {
            resource: vec!["aws_s3_bucket".into(), String::new(), "b-1".into()],
            ..Default::default()
        };
        assert_eq!(record.resource_field(0), Some("aws_s3_bucket"));
        assert_eq!(record.resource_field(1), None);
        assert_eq!(record.resource_name(), "unknown");
        assert!(record.has_resource_triple());
    }

    #[test]
    fn test_short_resource_triple() {
        let record = DriftRecord {
            resource: vec!["aws_s3_bucket".into(), "logs".into()],
            ..Default::default()
        };
        assert!(!record.has_resource_triple());
        assert_eq!(record.resource_name(), "logs");
    }

    #[test]
    fn test_analysis_result_defaults() {
        let result: AnalysisResult = serde_json::from_value(json!({})).unwrap();
        assert!(result.drifts.is_empty());
        assert!(result.summary.is_none());
        assert!(result.metadata.is_none());
    }
}
