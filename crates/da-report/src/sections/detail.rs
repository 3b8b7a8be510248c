//! Detailed analysis: one subsection per drift, in detection order.

use crate::layout::LayoutEngine;
use da_model::{is_truthy, kind_info, value_text, DriftRecord, Severity};

/// Forced page break after every `per_page` detail items, never after the
/// last one.
pub fn should_break_after(index: usize, total: usize, per_page: usize) -> bool {
    per_page > 0 && (index + 1) % per_page == 0 && index + 1 < total
}

/// Key-value rows for one drift's detail table.
///
/// Resource rows appear only when the full triple is present (strict length
/// check). The three `configuration_drift` extras are each gated on the
/// truthiness of their source value.
pub fn drift_rows(drift: &DriftRecord) -> Vec<(String, String)> {
    let info = kind_info(&drift.kind);
    let mut rows = Vec::new();

    if drift.has_resource_triple() {
        rows.push((
            "Resource Type:".to_string(),
            drift.resource_field(0).unwrap_or("Unknown").to_string(),
        ));
        rows.push((
            "Resource Name:".to_string(),
            drift.resource_field(1).unwrap_or("N/A").to_string(),
        ));
        rows.push((
            "Resource ID:".to_string(),
            drift.resource_field(2).unwrap_or("N/A").to_string(),
        ));
    }

    rows.push(("Drift Type:".to_string(), info.label.into_owned()));
    rows.push((
        "Severity:".to_string(),
        Severity::for_drift(drift).label().to_string(),
    ));
    let description = if drift.details.is_empty() {
        "No description available".to_string()
    } else {
        drift.details.clone()
    };
    rows.push(("Description:".to_string(), description));

    if drift.kind == "configuration_drift" {
        if let Some(expected) = drift.expected_value.as_ref().filter(|v| is_truthy(v)) {
            rows.push(("Expected Value:".to_string(), value_text(expected)));
        }
        if let Some(actual) = drift.actual_value.as_ref().filter(|v| is_truthy(v)) {
            rows.push(("Actual Value:".to_string(), value_text(actual)));
        }
        if let Some(attribute) = drift.attribute.as_deref().filter(|a| !a.is_empty()) {
            rows.push(("Affected Attribute:".to_string(), attribute.to_string()));
        }
    }

    rows
}

/// Per-item remediation template, keyed by kind with a generic
/// troubleshooting fallback.
pub fn remediation_text(drift: &DriftRecord) -> String {
    let name = drift.resource_name();
    match drift.kind.as_str() {
        "missing" => format!(
            "Missing Resource: {name}\n\
             This resource is defined in your Terraform configuration but doesn't exist \
             in your cloud environment.\n\
             \n\
             Remediation Steps:\n\
             1. Review what will be created: terraform plan\n\
             2. Create the missing resource: terraform apply\n\
             3. Verify the resource was created successfully"
        ),
        "orphaned" => format!(
            "Orphaned Resource: {name}\n\
             This resource exists in your cloud environment but is not managed by Terraform.\n\
             \n\
             Remediation Steps:\n\
             1. Import the orphaned resource: terraform import\n\
             2. Verify the import was successful\n\
             3. Update your .tf files to match the imported resource"
        ),
        "configuration_drift" => format!(
            "Configuration Drift: {name}\n\
             The resource configuration differs from what's defined in your Terraform files.\n\
             \n\
             Remediation Steps:\n\
             1. Review configuration differences: terraform plan\n\
             2. Apply configuration changes: terraform apply\n\
             3. Verify changes align with your requirements"
        ),
        _ => format!(
            "Analysis Error: {name}\n\
             An error occurred while analyzing this resource.\n\
             \n\
             Troubleshooting Steps:\n\
             1. Verify AWS credentials: aws sts get-caller-identity\n\
             2. Check Terraform configuration: terraform validate\n\
             3. Review resource state: terraform state list"
        ),
    }
}

/// Detailed-analysis section over the full drift list.
#[derive(Debug, Clone)]
pub struct DetailSection<'a> {
    drifts: &'a [DriftRecord],
    per_page: usize,
}

impl<'a> DetailSection<'a> {
    pub fn new(drifts: &'a [DriftRecord], per_page: usize) -> Self {
        Self { drifts, per_page }
    }

    pub fn write(&self, eng: &mut LayoutEngine) {
        eng.section_header("Detailed Analysis Results");

        if self.drifts.is_empty() {
            eng.paragraph(
                "No infrastructure drift detected. All resources are properly aligned \
                 with IaC configuration.",
            );
            return;
        }

        let total = self.drifts.len();
        for (index, drift) in self.drifts.iter().enumerate() {
            let info = kind_info(&drift.kind);
            eng.subsection_header(&format!("{} Drift #{}: {}", info.icon, index + 1, info.label));
            eng.key_value_table(&drift_rows(drift));
            eng.gap(10.0);

            eng.subsection_header("Remediation Guidance");
            eng.paragraph(&remediation_text(drift));
            eng.gap(15.0);

            if should_break_after(index, total, self.per_page) {
                eng.page_break();
            }
        }
    }
}
