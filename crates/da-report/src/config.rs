//! Report configuration types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// RGB color, components in `0.0..=1.0`.
pub type Rgb = [f32; 3];

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Page geometry in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width.
    pub width: f32,
    /// Page height.
    pub height: f32,
    /// Uniform margin on all four edges.
    pub margin: f32,
    /// Baseline-to-baseline distance for body text.
    pub line_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // A4 portrait.
        Self {
            width: 210.0,
            height: 297.0,
            margin: 20.0,
            line_height: 7.0,
        }
    }
}

impl PageGeometry {
    /// Width available for content between the margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Lowest cursor position before a page break is required.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

/// Fixed report color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Section headers, table header fill, title.
    pub primary: Rgb,
    /// Positive highlight boxes (no drift detected).
    pub success: Rgb,
    /// Informational highlight boxes (statistics).
    pub info: Rgb,
    /// Subsection headers.
    pub dark_gray: Rgb,
    /// Key-value label column fill.
    pub light_gray: Rgb,
    /// Body text.
    pub text: Rgb,
    /// Text on filled backgrounds.
    pub inverse_text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: rgb(51, 102, 204),
            success: rgb(51, 179, 77),
            info: rgb(77, 179, 230),
            dark_gray: rgb(77, 77, 77),
            light_gray: rgb(242, 242, 242),
            text: rgb(0, 0, 0),
            inverse_text: rgb(255, 255, 255),
        }
    }
}

/// Report builder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Page geometry.
    pub geometry: PageGeometry,
    /// Color scheme.
    pub palette: Palette,
    /// Title override. Defaults to the standard report title.
    #[serde(default)]
    pub title: Option<String>,
    /// Detail subsections rendered per page before a forced break.
    pub drifts_per_page: usize,
    /// Fixed generation timestamp for deterministic output. `None` means
    /// "now" at generation time.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            palette: Palette::default(),
            title: None,
            drifts_per_page: 2,
            generated_at: None,
        }
    }
}

impl ReportConfig {
    /// Report title, honoring the override.
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or("Infrastructure Drift Analysis Report")
    }

    /// Set a fixed title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pin the generation timestamp (deterministic output for golden tests).
    pub fn with_generated_at(mut self, ts: DateTime<Utc>) -> Self {
        self.generated_at = Some(ts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_a4() {
        let geo = PageGeometry::default();
        assert_eq!(geo.width, 210.0);
        assert_eq!(geo.height, 297.0);
        assert_eq!(geo.content_width(), 170.0);
        assert_eq!(geo.bottom_limit(), 277.0);
    }

    #[test]
    fn test_title_override() {
        let config = ReportConfig::default();
        assert_eq!(config.title(), "Infrastructure Drift Analysis Report");
        let config = config.with_title("Weekly Drift Scan");
        assert_eq!(config.title(), "Weekly Drift Scan");
    }
}
