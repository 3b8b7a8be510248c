//! Overall remediation summary and prevention best practices.

use crate::layout::LayoutEngine;
use da_model::{DriftRecord, SeverityTally};

/// Computed remediation-summary statistics.
#[derive(Debug, Clone, Copy)]
pub struct RemediationSection {
    pub total: usize,
    pub severity: SeverityTally,
}

impl RemediationSection {
    pub fn from_drifts(drifts: &[DriftRecord]) -> Self {
        Self {
            total: drifts.len(),
            severity: SeverityTally::from_drifts(drifts),
        }
    }

    /// Fixed prose summary parameterized by the computed counts.
    pub fn summary_text(&self) -> String {
        format!(
            "Summary: {} drift(s) detected requiring attention.\n\
             \n\
             General Approach:\n\
             - Review each drift's individual remediation guidance above\n\
             - Prioritize high-impact drifts ({}) for immediate attention\n\
             - Address medium-impact drifts ({}) this week\n\
             - Schedule low-impact drifts ({}) when convenient\n\
             - Test changes in a non-production environment first\n\
             - Apply changes during maintenance windows when possible\n\
             - Verify changes using terraform plan before applying",
            self.total, self.severity.high, self.severity.medium, self.severity.low
        )
    }

    /// Fixed best-practices block parameterized by the resource type.
    pub fn best_practices(resource_type: &str) -> String {
        format!(
            "Recommended Best Practices:\n\
             - Regular Monitoring: Schedule weekly drift detection scans for {resource_type} resources\n\
             - Change Management: Require all infrastructure changes to go through Terraform\n\
             - State Management: Use remote state storage with proper locking mechanisms\n\
             - Access Control: Limit direct cloud console access to emergency situations only\n\
             - Automation: Implement CI/CD pipelines for infrastructure deployments\n\
             - Documentation: Maintain clear documentation of infrastructure architecture\n\
             - Training: Ensure team members understand IaC principles and tools"
        )
    }

    pub fn write(&self, eng: &mut LayoutEngine, resource_type: &str) {
        eng.section_header("Overall Remediation Summary");

        if self.total == 0 {
            eng.paragraph("No remediation required - infrastructure is properly aligned.");
            return;
        }

        eng.paragraph(&self.summary_text());

        eng.subsection_header("Best Practices for Prevention");
        eng.paragraph(&Self::best_practices(resource_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let drifts = vec![
            DriftRecord {
                kind: "missing".into(),
                ..Default::default()
            },
            DriftRecord {
                kind: "orphaned".into(),
                ..Default::default()
            },
            DriftRecord {
                kind: "novel".into(),
                ..Default::default()
            },
        ];
        let section = RemediationSection::from_drifts(&drifts);
        let text = section.summary_text();
        assert!(text.starts_with("Summary: 3 drift(s) detected"));
        assert!(text.contains("high-impact drifts (1)"));
        assert!(text.contains("medium-impact drifts (1)"));
        assert!(text.contains("low-impact drifts (1)"));
    }

    #[test]
    fn test_best_practices_embeds_resource_type() {
        let text = RemediationSection::best_practices("dynamodb");
        assert!(text.contains("drift detection scans for dynamodb resources"));
    }
}
