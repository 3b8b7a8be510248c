//! Drift-kind catalog.
//!
//! Maps the open set of kind strings to display metadata. Four kinds are
//! known; everything else gets the generic default entry so new backend
//! kinds render without a client update.
//!
//! Icons are short ASCII markers: reports are rendered with the built-in
//! PDF fonts, which cannot encode symbols outside WinAnsi.

use crate::severity::Severity;
use std::borrow::Cow;

/// Display metadata for a drift kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindInfo {
    /// Human-readable label, e.g. "Missing Resources".
    pub label: Cow<'static, str>,
    /// ASCII icon marker prefixed to headers and table rows.
    pub icon: &'static str,
    /// Severity used in the breakdown table.
    pub default_severity: Severity,
    /// One-line description for the breakdown table.
    pub description: Cow<'static, str>,
}

/// Look up catalog metadata for a kind string.
///
/// Unrecognized kinds get a generic entry with the raw kind capitalized.
pub fn kind_info(kind: &str) -> KindInfo {
    match kind {
        "missing" => KindInfo {
            label: Cow::Borrowed("Missing Resources"),
            icon: "[x]",
            default_severity: Severity::High,
            description: Cow::Borrowed("Resources defined in IaC but not found in cloud"),
        },
        "orphaned" => KindInfo {
            label: Cow::Borrowed("Orphaned Resources"),
            icon: "[o]",
            default_severity: Severity::Medium,
            description: Cow::Borrowed("Resources in cloud but not managed by IaC"),
        },
        "configuration_drift" => KindInfo {
            label: Cow::Borrowed("Configuration Drift"),
            icon: "[~]",
            default_severity: Severity::Medium,
            description: Cow::Borrowed("Resources with configuration differences"),
        },
        "error" => KindInfo {
            label: Cow::Borrowed("Analysis Errors"),
            icon: "[!]",
            default_severity: Severity::High,
            description: Cow::Borrowed("Errors encountered during analysis"),
        },
        other => KindInfo {
            label: Cow::Owned(capitalize(other)),
            icon: "*",
            default_severity: Severity::Medium,
            description: Cow::Borrowed("Configuration difference detected"),
        },
    }
}

/// Uppercase the first character of a raw kind string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
