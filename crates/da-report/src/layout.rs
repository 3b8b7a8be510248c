//! Page layout engine.
//!
//! The engine keeps an explicit [`LayoutCursor`] (current page, vertical
//! offset from the top in mm) and appends positioned blocks to a growing
//! [`ReportDocument`]. Pagination is greedy and non-lookahead: before any
//! block of known height is placed, [`LayoutEngine::ensure_space`] starts a
//! new page if the block would cross the bottom margin. Tables paginate
//! per row and repeat their header row after an internal break.
//!
//! The engine never touches the PDF backend; the resulting document is a
//! plain value that the `pdf` module renders and that tests inspect
//! directly.

use crate::config::{PageGeometry, Palette, ReportConfig, Rgb};

/// Conversion factor from typographic points to millimeters.
const PT_TO_MM: f32 = 0.352_778;

/// Vertical advance per wrapped table-cell line, in mm (9 pt cells).
const CELL_LINE_STEP: f32 = 4.5;

/// Vertical padding inside a table cell, in mm.
const CELL_PADDING: f32 = 2.0;

/// Explicit rendering position: current page index and offset from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page: usize,
    pub y: f32,
}

/// One positioned drawing primitive.
///
/// `y` is measured from the top of the page: the text baseline for text,
/// the top edge for rectangles.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: Rgb,
        text: String,
    },
    FilledRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    StrokedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
}

/// One page of positioned blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    /// All text on this page, blocks joined by newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if let Block::Text { text, .. } = block {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }
}

/// The finished, immutable layout result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub pages: Vec<Page>,
}

impl ReportDocument {
    /// Whether any text block in the document contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.find_page(needle).is_some()
    }

    /// Index of the first page whose text contains `needle`.
    pub fn find_page(&self, needle: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.text().contains(needle))
    }

    /// All document text, page order.
    pub fn all_text(&self) -> String {
        self.pages.iter().map(Page::text).collect()
    }
}

/// Layout engine scoped to a single generation call.
pub struct LayoutEngine {
    geometry: PageGeometry,
    palette: Palette,
    pages: Vec<Page>,
    cursor: LayoutCursor,
}

impl LayoutEngine {
    /// Create an engine with one empty page and the cursor at the top margin.
    pub fn new(config: &ReportConfig) -> Self {
        let geometry = config.geometry;
        Self {
            geometry,
            palette: config.palette,
            pages: vec![Page::default()],
            cursor: LayoutCursor {
                page: 0,
                y: geometry.margin,
            },
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    /// Page geometry in effect.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Color scheme in effect.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Consume the engine and return the finished document.
    pub fn finish(self) -> ReportDocument {
        ReportDocument { pages: self.pages }
    }

    /// Start a new page and reset the cursor to the top margin.
    pub fn page_break(&mut self) {
        self.pages.push(Page::default());
        self.cursor.page = self.pages.len() - 1;
        self.cursor.y = self.geometry.margin;
    }

    /// Break the page if a block of height `needed` would cross the bottom
    /// margin at the current cursor.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.cursor.y + needed > self.geometry.bottom_limit() {
            self.page_break();
        }
    }

    /// Advance the cursor without emitting anything.
    pub fn gap(&mut self, dy: f32) {
        self.cursor.y += dy;
    }

    fn push(&mut self, block: Block) {
        self.pages[self.cursor.page].blocks.push(block);
    }

    fn text_at(&mut self, x: f32, y: f32, size: f32, bold: bool, color: Rgb, text: &str) {
        self.push(Block::Text {
            x,
            y,
            size,
            bold,
            color,
            text: text.to_string(),
        });
    }

    /// Report title, centered, at the current cursor.
    pub fn centered_title(&mut self, text: &str) {
        let width = text_width_mm(text, 24.0);
        let x = ((self.geometry.width - width) / 2.0).max(self.geometry.margin);
        let color = self.palette.primary;
        self.text_at(x, self.cursor.y, 24.0, true, color, text);
        self.cursor.y += 20.0;
    }

    /// Top-level section header.
    pub fn section_header(&mut self, text: &str) {
        self.ensure_space(30.0);
        let color = self.palette.primary;
        self.text_at(self.geometry.margin, self.cursor.y, 16.0, true, color, text);
        self.cursor.y += 15.0;
    }

    /// Second-level header.
    pub fn subsection_header(&mut self, text: &str) {
        self.ensure_space(20.0);
        let color = self.palette.dark_gray;
        self.text_at(self.geometry.margin, self.cursor.y, 14.0, true, color, text);
        self.cursor.y += 12.0;
    }

    /// Wrapped body text with a trailing gap. Breaks pages per line.
    pub fn paragraph(&mut self, text: &str) {
        let max_width = self.geometry.content_width();
        let color = self.palette.text;
        for line in wrap_text(text, 10.0, max_width) {
            self.ensure_space(self.geometry.line_height);
            self.text_at(self.geometry.margin, self.cursor.y, 10.0, false, color, &line);
            self.cursor.y += self.geometry.line_height;
        }
        self.cursor.y += 5.0;
    }

    /// Colored box with bold inverse text, sized to its wrapped content.
    pub fn highlight_box(&mut self, text: &str, color: Rgb) {
        let lines = wrap_text(text, 11.0, self.geometry.content_width() - 10.0);
        let box_height = ((lines.len() as f32 - 1.0) * 7.0 + 18.0).max(30.0);
        self.ensure_space(box_height + 10.0);
        let box_y = self.cursor.y - 5.0;

        self.push(Block::FilledRect {
            x: self.geometry.margin,
            y: box_y,
            width: self.geometry.content_width(),
            height: box_height,
            color,
        });

        let inverse = self.palette.inverse_text;
        let mut text_y = box_y + 10.0;
        for line in &lines {
            self.text_at(self.geometry.margin + 5.0, text_y, 11.0, true, inverse, line);
            text_y += 7.0;
        }

        self.cursor.y = box_y + box_height + 10.0;
    }

    /// Two-column grid table with a shaded bold label column. Paginates per
    /// row; no header row to repeat.
    pub fn key_value_table(&mut self, rows: &[(String, String)]) {
        let label_width = 45.0;
        let value_width = self.geometry.content_width() - label_width;
        let stroke = self.palette.dark_gray;

        for (label, value) in rows {
            let label_lines = wrap_text(label, 9.0, label_width - 2.0 * CELL_PADDING);
            let value_lines = wrap_text(value, 9.0, value_width - 2.0 * CELL_PADDING);
            let line_count = label_lines.len().max(value_lines.len()).max(1);
            let row_height = line_count as f32 * CELL_LINE_STEP + 2.0 * CELL_PADDING;

            self.ensure_space(row_height);
            let x = self.geometry.margin;
            let y = self.cursor.y;

            self.push(Block::FilledRect {
                x,
                y,
                width: label_width,
                height: row_height,
                color: self.palette.light_gray,
            });
            self.push(Block::StrokedRect {
                x,
                y,
                width: label_width,
                height: row_height,
                color: stroke,
            });
            self.push(Block::StrokedRect {
                x: x + label_width,
                y,
                width: value_width,
                height: row_height,
                color: stroke,
            });

            let text_color = self.palette.text;
            self.cell_lines(x, y, &label_lines, true, text_color);
            self.cell_lines(x + label_width, y, &value_lines, false, text_color);

            self.cursor.y += row_height;
        }
    }

    /// Striped table with a colored header row. Paginates per row and
    /// repeats the header row at the top of every continuation page.
    ///
    /// `weights` are relative column widths; they are normalized against the
    /// content width.
    pub fn table(&mut self, header: &[&str], rows: &[Vec<String>], weights: &[f32]) {
        let widths = self.column_widths(weights);
        self.table_header_row(header, &widths);

        for (index, row) in rows.iter().enumerate() {
            let cells: Vec<Vec<String>> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| wrap_text(cell, 9.0, w - 2.0 * CELL_PADDING))
                .collect();
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
            let row_height = line_count as f32 * CELL_LINE_STEP + 2.0 * CELL_PADDING;

            let limit = self.geometry.bottom_limit();
            if self.cursor.y + row_height > limit {
                self.page_break();
                self.table_header_row(header, &widths);
            }

            if index % 2 == 1 {
                self.push(Block::FilledRect {
                    x: self.geometry.margin,
                    y: self.cursor.y,
                    width: self.geometry.content_width(),
                    height: row_height,
                    color: self.palette.light_gray,
                });
            }

            let mut x = self.geometry.margin;
            let y = self.cursor.y;
            let text_color = self.palette.text;
            for (lines, width) in cells.iter().zip(&widths) {
                self.cell_lines(x, y, lines, false, text_color);
                x += width;
            }
            self.cursor.y += row_height;
        }
    }

    fn table_header_row(&mut self, header: &[&str], widths: &[f32]) {
        let row_height = CELL_LINE_STEP + 2.0 * CELL_PADDING;
        self.ensure_space(row_height);

        self.push(Block::FilledRect {
            x: self.geometry.margin,
            y: self.cursor.y,
            width: self.geometry.content_width(),
            height: row_height,
            color: self.palette.primary,
        });

        let mut x = self.geometry.margin;
        let y = self.cursor.y;
        let inverse = self.palette.inverse_text;
        for (cell, width) in header.iter().zip(widths) {
            self.text_at(x + CELL_PADDING, y + CELL_PADDING + 3.2, 9.0, true, inverse, cell);
            x += width;
        }
        self.cursor.y += row_height;
    }

    fn cell_lines(&mut self, x: f32, y: f32, lines: &[String], bold: bool, color: Rgb) {
        let mut line_y = y + CELL_PADDING + 3.2;
        for line in lines {
            self.text_at(x + CELL_PADDING, line_y, 9.0, bold, color, line);
            line_y += CELL_LINE_STEP;
        }
    }

    fn column_widths(&self, weights: &[f32]) -> Vec<f32> {
        let total: f32 = weights.iter().sum();
        let content = self.geometry.content_width();
        weights.iter().map(|w| w / total * content).collect()
    }
}

/// Approximate advance width of one Helvetica glyph, in em units.
fn char_width_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | '(' | ')' | '[' | ']' => 0.30,
        'f' | 't' | 'r' | ' ' | '-' | '/' | '"' => 0.40,
        'm' | 'w' | 'M' | 'W' | '@' => 0.90,
        'A'..='Z' | '0'..='9' | '_' | '#' | '%' | '&' => 0.70,
        _ => 0.55,
    }
}

/// Approximate rendered width of `text` at `size_pt`, in mm.
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let em: f32 = text.chars().map(char_width_em).sum();
    em * size_pt * PT_TO_MM
}

/// Greedy word wrap to `max_width_mm`. Honors embedded newlines; words
/// wider than the limit are hard-broken.
pub fn wrap_text(text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width_mm(&candidate, size_pt) <= max_width_mm {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if text_width_mm(word, size_pt) <= max_width_mm {
                current = word.to_string();
            } else {
                // Hard-break an overlong word.
                let mut piece = String::new();
                for c in word.chars() {
                    piece.push(c);
                    if text_width_mm(&piece, size_pt) > max_width_mm {
                        piece.pop();
                        lines.push(std::mem::take(&mut piece));
                        piece.push(c);
                    }
                }
                current = piece;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
