//! Report generator implementation.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::layout::{LayoutEngine, ReportDocument};
use crate::pdf;
use crate::sections::{
    DetailSection, ImpactSection, RemediationSection, SummarySection, TitleSection,
};

use chrono::Utc;
use da_model::AnalysisResult;
use tracing::{debug, info, warn};

/// Drift-analysis report generator.
///
/// Holds only immutable configuration; all layout state is created per
/// call, so one generator can serve concurrent callers.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate the PDF report.
    ///
    /// `resource_type` and `source_file` are opaque labels embedded verbatim
    /// in the title metadata and remediation text. Never fails: internal
    /// errors degrade to an error document, and a static fallback guarantees
    /// non-empty bytes even if the PDF backend is the failure source.
    pub fn generate(
        &self,
        result: &AnalysisResult,
        resource_type: &str,
        source_file: &str,
    ) -> Vec<u8> {
        debug!(
            drifts = result.drifts.len(),
            resource_type, source_file, "generating drift analysis report"
        );
        match self.try_generate(result, resource_type, source_file) {
            Ok(bytes) => {
                info!(bytes = bytes.len(), "report generated");
                bytes
            }
            Err(err) => {
                warn!(error = %err, "report generation failed, emitting error document");
                self.error_pdf(&err)
            }
        }
    }

    /// Run the layout pass only.
    ///
    /// Pure computation over the input; exposed so content invariants can be
    /// asserted without parsing PDF bytes.
    pub fn build_document(
        &self,
        result: &AnalysisResult,
        resource_type: &str,
        source_file: &str,
    ) -> ReportDocument {
        let generated_at = self.config.generated_at.unwrap_or_else(Utc::now);
        let mut eng = LayoutEngine::new(&self.config);

        TitleSection::new(generated_at, resource_type, source_file)
            .write(&mut eng, self.config.title());
        SummarySection::from_drifts(&result.drifts).write(&mut eng, resource_type);
        ImpactSection::from_drifts(&result.drifts).write(&mut eng, resource_type);
        DetailSection::new(&result.drifts, self.config.drifts_per_page).write(&mut eng);
        RemediationSection::from_drifts(&result.drifts).write(&mut eng, resource_type);

        eng.finish()
    }

    fn try_generate(
        &self,
        result: &AnalysisResult,
        resource_type: &str,
        source_file: &str,
    ) -> Result<Vec<u8>> {
        let document = self.build_document(result, resource_type, source_file);
        pdf::render(&document, &self.config)
    }

    fn error_pdf(&self, err: &ReportError) -> Vec<u8> {
        match self.error_document(err) {
            Ok(bytes) => bytes,
            Err(second) => {
                warn!(error = %second, "error document failed, using static fallback");
                pdf::fallback_pdf()
            }
        }
    }

    /// Single-page error document, rendered with default geometry so a
    /// config-induced render fault cannot recur here.
    fn error_document(&self, err: &ReportError) -> Result<Vec<u8>> {
        let config = ReportConfig {
            title: self.config.title.clone(),
            ..ReportConfig::default()
        };
        let mut eng = LayoutEngine::new(&config);
        eng.section_header("PDF Generation Error");
        eng.paragraph(&format!(
            "An error occurred while generating the PDF report: {err}"
        ));
        eng.paragraph("Please try again or contact support if the issue persists.");
        pdf::render(&eng.finish(), &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use da_model::DriftRecord;

    fn result_with(kinds: &[&str]) -> AnalysisResult {
        AnalysisResult {
            drifts: kinds
                .iter()
                .map(|k| DriftRecord {
                    kind: k.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_result_renders_fixed_texts() {
        let generator = ReportGenerator::default_config();
        let doc = generator.build_document(&result_with(&[]), "s3", "infra.tf");

        assert!(doc.contains_text("No infrastructure drift detected"));
        assert!(doc.contains_text("No impact assessment required - no drift detected."));
        assert!(doc.contains_text("No remediation required - infrastructure is properly aligned."));
        assert!(!doc.contains_text("Drift Type Breakdown"));
        assert!(!doc.contains_text("Drift #1"));
    }

    #[test]
    fn test_generate_returns_pdf_bytes() {
        let generator = ReportGenerator::default_config();
        let bytes = generator.generate(&result_with(&["missing"]), "s3", "infra.tf");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_fault_containment_on_bad_geometry() {
        let mut config = ReportConfig::default();
        config.geometry.height = 0.0;
        let generator = ReportGenerator::new(config);
        let bytes = generator.generate(&result_with(&["missing"]), "s3", "infra.tf");
        // Render fails, the error document (default geometry) takes over.
        assert!(!bytes.is_empty());
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_identical_inputs_yield_identical_documents() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let config = ReportConfig::default().with_generated_at(ts);
        let generator = ReportGenerator::new(config);
        let result = result_with(&["missing", "orphaned", "configuration_drift"]);

        let first = generator.build_document(&result, "ec2", "main.tf");
        let second = generator.build_document(&result, "ec2", "main.tf");
        assert_eq!(first, second);
    }

    #[test]
    fn test_forced_break_places_third_drift_on_later_page() {
        let generator = ReportGenerator::default_config();
        let doc = generator.build_document(
            &result_with(&["missing", "missing", "missing", "missing"]),
            "s3",
            "infra.tf",
        );
        let second = doc.find_page("Drift #2:").expect("drift #2 rendered");
        let third = doc.find_page("Drift #3:").expect("drift #3 rendered");
        assert!(third > second);
        // No forced break after the last item: the remediation summary does
        // not start on a fresh page of its own.
        let fourth = doc.find_page("Drift #4:").expect("drift #4 rendered");
        let summary = doc.find_page("Overall Remediation Summary").expect("summary rendered");
        assert!(summary >= fourth);
    }
}
