//! PDF label sheets
//!
//! Labels are stacked down A4 pages. Every barcode is a Code 128 of the
//! human-readable element string, centered on the page with that string
//! printed under it; the captions follow, also centered.
//!
//! Layout happens in two steps: [`layout_pdf`] places bars and text lines
//! (in points, origin at the bottom-left corner), and [`render_pdf`] writes
//! them out with `printpdf`.

use crate::label::{Label, LabelError};
use crate::messages::{Caption, Lang};
use barcoders::sym::code128::Code128;
use printpdf::{BuiltinFont, Mm, PdfDocument, Rect};
use tracing::debug;

/// A4 width in points
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 height in points
pub const PAGE_HEIGHT: f32 = 841.89;
/// Helvetica size of every text line
pub const FONT_SIZE: f32 = 12.0;

const MM_PER_PT: f32 = 25.4 / 72.0;
const TOP_MARGIN: f32 = 50.0;
/// No label starts below this line
const BOTTOM_LIMIT: f32 = 100.0;
const BAR_HEIGHT: f32 = 50.0;
const BAR_MODULE: f32 = 1.0;
const BARCODE_ADVANCE: f32 = 55.0;
const BARCODE_TEXT_ADVANCE: f32 = 26.0;
const CAPTION_ROW: f32 = 18.0;
const LABEL_GAP: f32 = 30.0;
/// `barcoders` start marker for Code 128 character set B
const CODE128_SET_B: char = 'Ɓ';

/// One thing drawn on a page
#[derive(Debug, Clone, PartialEq)]
pub enum PdfItem {
    /// Filled barcode bar; `x`, `y` is its bottom-left corner
    Bar { x: f32, y: f32, width: f32, height: f32 },
    /// Text line; `x` is its left edge, `y` its baseline
    Text { x: f32, y: f32, text: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfPage {
    pub items: Vec<PdfItem>,
}

impl PdfPage {
    /// Text lines in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            PdfItem::Text { text, .. } => Some(text.as_str()),
            PdfItem::Bar { .. } => None,
        })
    }
}

/// Places `labels` on as many pages as they need
///
/// There is always at least one page, blank when `labels` is empty.
pub fn layout_pdf(labels: &[Label], lang: Lang) -> Result<Vec<PdfPage>, LabelError> {
    let mut pages = Vec::new();
    let mut page = PdfPage::default();
    let mut y = PAGE_HEIGHT - TOP_MARGIN;

    for label in labels {
        if y < BOTTOM_LIMIT {
            pages.push(std::mem::take(&mut page));
            y = PAGE_HEIGHT - TOP_MARGIN;
        }
        y = layout_label(&mut page, label, lang, y)? - LABEL_GAP;
    }

    pages.push(page);
    Ok(pages)
}

/// Renders `labels` as a PDF document
pub fn render_pdf(labels: &[Label], lang: Lang) -> Result<Vec<u8>, LabelError> {
    let pages = layout_pdf(labels, lang)?;
    debug!(labels = labels.len(), pages = pages.len(), "rendering PDF");

    let (doc, first_page, first_layer) =
        PdfDocument::new("GS1 labels", mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Labels");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| LabelError::Pdf(e.to_string()))?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Labels"));
    }

    for ((page_index, layer_index), page) in targets.into_iter().zip(&pages) {
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for item in &page.items {
            match item {
                PdfItem::Bar {
                    x,
                    y,
                    width,
                    height,
                } => layer.add_rect(Rect::new(mm(*x), mm(*y), mm(x + width), mm(y + height))),
                PdfItem::Text { x, y, text } => {
                    layer.use_text(text.as_str(), FONT_SIZE, mm(*x), mm(*y), &font)
                }
            }
        }
    }

    doc.save_to_bytes().map_err(|e| LabelError::Pdf(e.to_string()))
}

/// Code 128 modules of `data` (1 = bar, 0 = space), character set B
pub fn code128_modules(data: &str) -> Result<Vec<u8>, LabelError> {
    Code128::new(format!("{}{}", CODE128_SET_B, data))
        .map(|barcode| barcode.encode())
        .map_err(|e| LabelError::Barcode {
            data: data.to_string(),
            reason: e.to_string(),
        })
}

// Returns the y where the next label may start.
fn layout_label(page: &mut PdfPage, label: &Label, lang: Lang, top: f32) -> Result<f32, LabelError> {
    let item = label.contents();
    let mut y = top;

    let quantity = match label.sscc() {
        Some(sscc) => {
            y = barcode_block(page, &format!("(00){}", sscc), y)?;
            Caption::CaseCount
        }
        None => Caption::Quantity,
    };
    y = barcode_block(page, &label.item_element_string()?, y)?;

    let mut captions = vec![(quantity, item.quantity.to_string())];
    if let Some(description) = &item.description {
        captions.push((Caption::Description, description.clone()));
    }
    captions.push((Caption::Expiry, item.expiry.to_string()));
    captions.push((Caption::Gtin, item.gtin.to_string()));
    captions.push((Caption::Lot, item.lot.clone()));
    if let Some(kg) = &item.net_weight_kg {
        captions.push((Caption::NetWeight, format!("{} KG", kg)));
    }

    for (caption, value) in captions {
        centered_text(page, format!("{}: {}", caption.text(lang), value), y - 1.0);
        y -= CAPTION_ROW;
    }
    Ok(y)
}

fn barcode_block(page: &mut PdfPage, data: &str, top: f32) -> Result<f32, LabelError> {
    let modules = code128_modules(data)?;
    let left = (PAGE_WIDTH - modules.len() as f32 * BAR_MODULE) / 2.0;
    let bottom = top - BAR_HEIGHT;

    // one rectangle per run of bar modules
    let mut run_start = None;
    for (i, module) in modules.iter().copied().chain(std::iter::once(0)).enumerate() {
        match (module, run_start) {
            (1, None) => run_start = Some(i),
            (0, Some(start)) => {
                page.items.push(PdfItem::Bar {
                    x: left + start as f32 * BAR_MODULE,
                    y: bottom,
                    width: (i - start) as f32 * BAR_MODULE,
                    height: BAR_HEIGHT,
                });
                run_start = None;
            }
            _ => {}
        }
    }

    let y = top - BARCODE_ADVANCE;
    centered_text(page, data.to_string(), y - 5.0);
    Ok(y - BARCODE_TEXT_ADVANCE)
}

fn centered_text(page: &mut PdfPage, text: String, y: f32) {
    let x = (PAGE_WIDTH - text_width(&text)) / 2.0;
    page.items.push(PdfItem::Text { x, y, text });
}

/// Approximate Helvetica advance width of `text` at [`FONT_SIZE`], in points
fn text_width(text: &str) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c {
            '0'..='9' => 556,
            ' ' | '.' | ',' | ':' | '/' => 278,
            '(' | ')' | '-' => 333,
            'A'..='Z' => 667,
            'a'..='z' => 500,
            _ => 556,
        })
        .sum();
    units as f32 * FONT_SIZE / 1000.0
}

fn mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}
