//! PDF emission for a laid-out [`ReportDocument`].
//!
//! Uses the built-in Helvetica faces so no font files are needed at
//! runtime. Built-in fonts are WinAnsi-encoded, so all text is sanitized
//! to printable ASCII before placement.

use crate::config::{PageGeometry, ReportConfig, Rgb};
use crate::error::{ReportError, Result};
use crate::layout::{Block, ReportDocument};

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect,
    Rgb as PdfRgb,
};

/// Render a laid-out document to PDF bytes.
pub fn render(document: &ReportDocument, config: &ReportConfig) -> Result<Vec<u8>> {
    validate_geometry(&config.geometry)?;
    let geo = config.geometry;

    let (doc, first_page, first_layer) =
        PdfDocument::new(config.title(), Mm(geo.width), Mm(geo.height), "content");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(Mm(geo.width), Mm(geo.height), "content");
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        for block in &page.blocks {
            draw_block(&layer, block, geo.height, &regular, &bold);
        }
    }

    Ok(doc.save_to_bytes()?)
}

fn validate_geometry(geo: &PageGeometry) -> Result<()> {
    let values = [geo.width, geo.height, geo.margin, geo.line_height];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ReportError::InvalidGeometry(
            "non-finite page dimension".to_string(),
        ));
    }
    if geo.width <= 0.0 || geo.height <= 0.0 || geo.line_height <= 0.0 {
        return Err(ReportError::InvalidGeometry(format!(
            "page {}x{} mm with line height {} mm",
            geo.width, geo.height, geo.line_height
        )));
    }
    if geo.margin < 0.0 || 2.0 * geo.margin >= geo.width.min(geo.height) {
        return Err(ReportError::InvalidGeometry(format!(
            "margin {} mm leaves no content area",
            geo.margin
        )));
    }
    Ok(())
}

fn draw_block(
    layer: &PdfLayerReference,
    block: &Block,
    page_height: f32,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    match block {
        Block::Text {
            x,
            y,
            size,
            bold: is_bold,
            color,
            text,
        } => {
            layer.set_fill_color(pdf_color(*color));
            let font = if *is_bold { bold } else { regular };
            // Layout y is top-down; PDF space is bottom-up.
            layer.use_text(sanitize(text), *size, Mm(*x), Mm(page_height - *y), font);
        }
        Block::FilledRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            layer.set_fill_color(pdf_color(*color));
            layer.add_rect(rect_at(*x, *y, *width, *height, page_height, PaintMode::Fill));
        }
        Block::StrokedRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(0.2);
            layer.add_rect(rect_at(
                *x,
                *y,
                *width,
                *height,
                page_height,
                PaintMode::Stroke,
            ));
        }
    }
}

fn rect_at(x: f32, y: f32, width: f32, height: f32, page_height: f32, mode: PaintMode) -> Rect {
    Rect::new(
        Mm(x),
        Mm(page_height - (y + height)),
        Mm(x + width),
        Mm(page_height - y),
    )
    .with_mode(mode)
}

fn pdf_color(color: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(color[0], color[1], color[2], None))
}

/// Replace anything outside printable ASCII; built-in fonts cannot encode it.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

/// Last-resort error document, assembled by plain byte concatenation.
///
/// The top-level recovery path must be able to return a valid PDF even if
/// the PDF backend itself is the failure source, so this touches no
/// fallible API at all.
pub fn fallback_pdf() -> Vec<u8> {
    let stream = "BT /F1 16 Tf 72 770 Td (PDF Generation Error) Tj ET\n\
                  BT /F1 10 Tf 72 750 Td (Report generation failed. Please try again.) Tj ET";
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, object));
    }

    let xref_pos = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_pos
    ));
    out.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;

    #[test]
    fn test_render_empty_document() {
        let config = ReportConfig::default();
        let doc = LayoutEngine::new(&config).finish();
        let bytes = render(&doc, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_text_and_rects() {
        let config = ReportConfig::default();
        let mut eng = LayoutEngine::new(&config);
        eng.section_header("Header");
        eng.highlight_box("boxed", config.palette.info);
        eng.key_value_table(&[("Key:".into(), "value".into())]);
        let bytes = render(&eng.finish(), &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut config = ReportConfig::default();
        config.geometry.height = f32::NAN;
        let doc = ReportDocument::default();
        assert!(matches!(
            render(&doc, &config),
            Err(ReportError::InvalidGeometry(_))
        ));

        config.geometry.height = 297.0;
        config.geometry.margin = 200.0;
        assert!(matches!(
            render(&doc, &config),
            Err(ReportError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_sanitize_replaces_non_ascii() {
        assert_eq!(sanitize("plain text"), "plain text");
        assert_eq!(sanitize("caf\u{e9} \u{2713}"), "caf? ?");
    }

    #[test]
    fn test_fallback_pdf_is_well_formed() {
        let bytes = fallback_pdf();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("PDF Generation Error"));
        assert!(text.trim_end().ends_with("%%EOF"));
    }
}
