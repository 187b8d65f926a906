use std::path::Path;

use engine_logging::engine_debug;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

use crate::persist::{write_document, PersistError};

const DOCUMENT_TITLE: &str = "page2pdf";
const LAYER_NAME: &str = "Text";
const PT_TO_MM: f32 = 25.4 / 72.0;
/// Courier glyphs all advance by 600/1000 em.
const COURIER_ADVANCE_EM: f32 = 0.6;
const TAB_WIDTH: usize = 4;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not write document: {0}")]
    Persist(#[from] PersistError),
    #[error("could not assemble pdf: {0}")]
    Pdf(String),
}

/// Page geometry and type settings. The default is A4 with Courier 12pt on 10mm lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// Distance from the bottom edge that triggers a page break.
    pub margin_bottom_mm: f32,
    /// Horizontal inset of the text inside the content box.
    pub cell_padding_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_left_mm: 10.0,
            margin_top_mm: 10.0,
            margin_right_mm: 10.0,
            margin_bottom_mm: 20.0,
            cell_padding_mm: 1.0,
            font_size_pt: 12.0,
            line_height_mm: 10.0,
        }
    }
}

impl RenderSettings {
    pub fn chars_per_line(&self) -> usize {
        let usable = self.page_width_mm
            - self.margin_left_mm
            - self.margin_right_mm
            - 2.0 * self.cell_padding_mm;
        let glyph = self.font_size_pt * COURIER_ADVANCE_EM * PT_TO_MM;
        ((usable / glyph).floor() as usize).max(1)
    }

    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_height_mm - self.margin_top_mm - self.margin_bottom_mm;
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }

    /// Baseline of `row` measured from the bottom edge, text centred in its line.
    fn baseline_mm(&self, row: usize) -> f32 {
        let from_top = self.margin_top_mm
            + row as f32 * self.line_height_mm
            + self.line_height_mm / 2.0
            + 0.3 * self.font_size_pt * PT_TO_MM;
        self.page_height_mm - from_top
    }
}

pub trait Renderer {
    /// Lay `text` out and write it to `path`, replacing any existing file.
    fn render(&self, text: &str, path: &Path) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    settings: RenderSettings,
}

impl PdfRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    fn build_pdf(&self, pages: &[Vec<String>]) -> Result<Vec<u8>, RenderError> {
        let s = &self.settings;
        let (doc, first_page, first_layer) = PdfDocument::new(
            DOCUMENT_TITLE,
            Mm(s.page_width_mm),
            Mm(s.page_height_mm),
            LAYER_NAME,
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut first = Some((first_page, first_layer));
        for lines in pages {
            let (page, layer) = match first.take() {
                Some(indices) => indices,
                None => doc.add_page(Mm(s.page_width_mm), Mm(s.page_height_mm), LAYER_NAME),
            };
            let layer = doc.get_page(page).get_layer(layer);
            let x = Mm(s.margin_left_mm + s.cell_padding_mm);
            for (row, line) in lines.iter().enumerate() {
                if line.is_empty() {
                    continue;
                }
                layer.use_text(line.as_str(), s.font_size_pt, x, Mm(s.baseline_mm(row)), &font);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, text: &str, path: &Path) -> Result<(), RenderError> {
        let pages = layout_pages(text, &self.settings);
        let bytes = self.build_pdf(&pages)?;
        write_document(path, &bytes)?;
        engine_debug!(
            "rendered {} bytes of text onto {} page(s), {} bytes -> {}",
            text.len(),
            pages.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Split `text` into pages of wrapped lines. Always yields at least one page.
///
/// Hard newlines start a new line. A line that is too long breaks after the
/// last space that still fits, or mid-word when there is none.
pub fn layout_pages(text: &str, settings: &RenderSettings) -> Vec<Vec<String>> {
    let width = settings.chars_per_line();
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let chars = printable_chars(paragraph);
        wrap_paragraph(&chars, width, &mut lines);
    }

    let mut pages: Vec<Vec<String>> = lines
        .chunks(settings.lines_per_page())
        .map(|chunk| chunk.to_vec())
        .collect();
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

fn wrap_paragraph(chars: &[char], width: usize, out: &mut Vec<String>) {
    if chars.is_empty() {
        out.push(String::new());
        return;
    }
    let mut start = 0;
    while start < chars.len() {
        let rest = chars.len() - start;
        if rest <= width {
            out.push(chars[start..].iter().collect());
            break;
        }
        // A space right at the overflow position still counts as a break point.
        let window_end = start + width;
        match chars[start..=window_end].iter().rposition(|&c| c == ' ') {
            Some(offset) => {
                out.push(chars[start..start + offset].iter().collect());
                start += offset + 1;
            }
            None => {
                out.push(chars[start..window_end].iter().collect());
                start = window_end;
            }
        }
    }
}

/// Map a line onto what the built-in font can draw.
fn printable_chars(line: &str) -> Vec<char> {
    let mut chars = Vec::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\r' => {}
            '\t' => chars.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            ' '..='~' | '\u{a0}'..='\u{ff}' => chars.push(c),
            c if c.is_control() => chars.push(' '),
            _ => chars.push('?'),
        }
    }
    chars
}
