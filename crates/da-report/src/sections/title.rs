//! Title section: centered report title plus a metadata table.

use crate::layout::LayoutEngine;
use chrono::{DateTime, Utc};

/// Title-page metadata.
#[derive(Debug, Clone)]
pub struct TitleSection {
    pub generated_at: DateTime<Utc>,
    pub source_file: String,
    pub resource_type: String,
}

impl TitleSection {
    pub fn new(
        generated_at: DateTime<Utc>,
        resource_type: impl Into<String>,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            generated_at,
            source_file: source_file.into(),
            resource_type: resource_type.into(),
        }
    }

    /// Key-value rows for the metadata table.
    pub fn metadata_rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "Report Generated:".to_string(),
                self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ),
            ("Source File:".to_string(), self.source_file.clone()),
            (
                "Resource Type:".to_string(),
                self.resource_type.to_uppercase(),
            ),
            (
                "Analysis Type:".to_string(),
                "Infrastructure Drift Detection".to_string(),
            ),
        ]
    }

    pub fn write(&self, eng: &mut LayoutEngine, title: &str) {
        eng.centered_title(title);
        eng.key_value_table(&self.metadata_rows());
        eng.gap(20.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_metadata_rows() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let section = TitleSection::new(ts, "s3", "infra.tf");
        let rows = section.metadata_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].1, "2026-03-14 09:26:53 UTC");
        assert_eq!(rows[1].1, "infra.tf");
        assert_eq!(rows[2].1, "S3");
        assert_eq!(rows[3].1, "Infrastructure Drift Detection");
    }

    #[test]
    fn test_labels_embedded_verbatim() {
        let ts = Utc::now();
        let section = TitleSection::new(ts, "", "weird name (v2).tf");
        let rows = section.metadata_rows();
        assert_eq!(rows[1].1, "weird name (v2).tf");
        assert_eq!(rows[2].1, "");
    }
}
