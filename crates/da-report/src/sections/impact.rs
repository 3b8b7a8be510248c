//! Impact assessment: business, technical, and security prose blocks.

use crate::layout::LayoutEngine;
use da_model::DriftRecord;

/// Per-kind counts feeding the impact templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpactSection {
    pub total: usize,
    pub missing: usize,
    pub orphaned: usize,
    pub configuration: usize,
    pub errors: usize,
}

impl ImpactSection {
    pub fn from_drifts(drifts: &[DriftRecord]) -> Self {
        let mut section = ImpactSection {
            total: drifts.len(),
            ..Default::default()
        };
        for drift in drifts {
            match drift.kind.as_str() {
                "missing" => section.missing += 1,
                "orphaned" => section.orphaned += 1,
                "configuration_drift" => section.configuration += 1,
                "error" => section.errors += 1,
                _ => {}
            }
        }
        section
    }

    /// One templated sentence per nonzero category, fixed order, or the
    /// block's fallback sentence.
    fn assemble(parts: Vec<String>, fallback: &str) -> String {
        if parts.is_empty() {
            fallback.to_string()
        } else {
            parts.join("\n")
        }
    }

    pub fn business_impact(&self, resource_type: &str) -> String {
        let mut parts = Vec::new();
        if self.missing > 0 {
            parts.push(format!(
                "- Service Availability Risk: {} missing {} resource(s) may cause service disruptions",
                self.missing, resource_type
            ));
        }
        if self.orphaned > 0 {
            parts.push(format!(
                "- Cost Management: {} unmanaged {} resource(s) may incur unexpected costs",
                self.orphaned, resource_type
            ));
        }
        if self.configuration > 0 {
            parts.push(format!(
                "- Compliance Risk: {} configuration drift(s) may violate security or compliance policies",
                self.configuration
            ));
        }
        if self.errors > 0 {
            parts.push(format!(
                "- Operational Risk: {} analysis error(s) indicate potential infrastructure management issues",
                self.errors
            ));
        }
        Self::assemble(
            parts,
            "No significant business impact identified. Infrastructure is well-managed and aligned.",
        )
    }

    pub fn technical_impact(&self, resource_type: &str) -> String {
        let mut parts = Vec::new();
        if self.missing > 0 {
            parts.push(format!(
                "- Infrastructure Gaps: Missing {} resources may break dependencies and integrations",
                resource_type
            ));
        }
        if self.orphaned > 0 {
            parts.push(
                "- Management Overhead: Untracked resources increase operational complexity"
                    .to_string(),
            );
        }
        if self.configuration > 0 {
            parts.push(
                "- Configuration Inconsistency: Drift may lead to unpredictable behavior and debugging difficulties"
                    .to_string(),
            );
        }
        if self.errors > 0 {
            parts.push(
                "- Monitoring Gaps: Analysis errors may indicate blind spots in infrastructure monitoring"
                    .to_string(),
            );
        }
        Self::assemble(
            parts,
            "Technical infrastructure is consistent and well-monitored.",
        )
    }

    pub fn security_impact(&self, resource_type: &str) -> String {
        let mut parts = Vec::new();
        if self.missing > 0 {
            parts.push(format!(
                "- Security Controls: Missing {} resources may lack proper security configurations",
                resource_type
            ));
        }
        if self.orphaned > 0 {
            parts.push(
                "- Shadow IT Risk: Unmanaged resources may not follow security best practices"
                    .to_string(),
            );
        }
        if self.configuration > 0 {
            parts.push(
                "- Policy Violations: Configuration drift may violate organizational security policies"
                    .to_string(),
            );
        }
        if self.errors > 0 {
            parts.push(
                "- Audit Trail: Analysis errors may impact compliance reporting and audit trails"
                    .to_string(),
            );
        }
        Self::assemble(
            parts,
            "Security posture is maintained with proper governance and compliance.",
        )
    }

    pub fn write(&self, eng: &mut LayoutEngine, resource_type: &str) {
        eng.section_header("Impact Assessment");

        if self.total == 0 {
            eng.paragraph("No impact assessment required - no drift detected.");
            return;
        }

        eng.subsection_header("Business Impact");
        eng.paragraph(&self.business_impact(resource_type));

        eng.subsection_header("Technical Impact");
        eng.paragraph(&self.technical_impact(resource_type));

        eng.subsection_header("Security & Compliance Impact");
        eng.paragraph(&self.security_impact(resource_type));
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
    fn test_counts_known_kinds_only() {
        let drifts = vec![
            drift("missing"),
            drift("missing"),
            drift("orphaned"),
            drift("configuration_drift"),
            drift("error"),
            drift("mystery"),
        ];
        let section = ImpactSection::from_drifts(&drifts);
        assert_eq!(section.total, 6);
        assert_eq!(section.missing, 2);
        assert_eq!(section.orphaned, 1);
        assert_eq!(section.configuration, 1);
        assert_eq!(section.errors, 1);
    }

    #[test]
    fn test_sentences_in_fixed_category_order() {
        let section = ImpactSection {
            total: 3,
            missing: 1,
            orphaned: 1,
            configuration: 0,
            errors: 1,
        };
        let text = section.business_impact("rds");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Service Availability Risk"));
        assert!(lines[1].contains("Cost Management"));
        assert!(lines[2].contains("Operational Risk"));
        assert!(lines[0].contains("1 missing rds resource(s)"));
    }

    #[test]
    fn test_fallback_sentence_when_no_categories_apply() {
        // Only unknown kinds: the section still renders, with fallbacks.
        let section = ImpactSection::from_drifts(&[drift("mystery")]);
        assert_eq!(section.total, 1);
        assert!(section.business_impact("s3").starts_with("No significant business impact"));
        assert_eq!(
            section.technical_impact("s3"),
            "Technical infrastructure is consistent and well-monitored."
        );
        assert_eq!(
            section.security_impact("s3"),
            "Security posture is maintained with proper governance and compliance."
        );
    }
}
