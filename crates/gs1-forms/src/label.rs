//! GS1 logistics labels
//!
//! Turns accepted forms into the GS1 element string carried by the Code 128
//! barcode and into ZPL for Zebra label printers. Application identifiers
//! used:
//!
//! | AI   | Content                        |
//! |------|--------------------------------|
//! | (00) | SSCC (pallets only)            |
//! | (01) | GTIN                           |
//! | (10) | Lot                            |
//! | (17) | Expiry date, `YYMMDD`          |
//! | (37) | Units (case) or cases (pallet) |

use crate::form::{ItemForm, PalletForm};
use crate::messages::{Caption, Lang};
use crate::rule::FieldViolation;
use crate::snapshot::FormSnapshot;
use crate::validator::FormKind;
use gs1_forms_types::{ExpiryDate, Sscc};
use gs1_forms_validation::parse_calendar_date;
use std::fmt::Write;
use thiserror::Error;
use tracing::debug;

/// Default ZPL print width in dots
pub const DEFAULT_LABEL_WIDTH: u32 = 800;

/// Label length in dots (`^LL`)
const LABEL_LENGTH: u32 = 609;
/// Left margin of every field
const FIELD_X: u32 = 50;
/// First field row
const FIRST_ROW_Y: u32 = 50;
/// Vertical advance after a text line
const TEXT_ROW_HEIGHT: u32 = 40;
/// Vertical advance after the SSCC barcode
const SSCC_BARCODE_HEIGHT: u32 = 160;
/// Estimated dots per element string character at module width 1, doubled
const DOTS_PER_CHAR: u64 = 11 * 2;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error(transparent)]
    Violation(#[from] FieldViolation),

    #[error("expiry date '{0}' is not a calendar date")]
    InvalidExpiry(String),

    #[error("cannot encode '{data}' as Code 128: {reason}")]
    Barcode { data: String, reason: String },

    #[error("failed to write PDF: {0}")]
    Pdf(String),
}

/// One printable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Case(ItemForm),
    Pallet(PalletForm),
}

impl Label {
    /// Validates `snapshot` as a `kind` form and wraps the typed result
    pub fn from_snapshot(kind: FormKind, snapshot: &FormSnapshot) -> Result<Self, FieldViolation> {
        Ok(match kind {
            FormKind::Item => Label::Case(ItemForm::try_from(snapshot)?),
            FormKind::Pallet => Label::Pallet(PalletForm::try_from(snapshot)?),
        })
    }

    pub fn kind(&self) -> FormKind {
        match self {
            Label::Case(_) => FormKind::Item,
            Label::Pallet(_) => FormKind::Pallet,
        }
    }

    /// Item line printed on the label
    pub fn contents(&self) -> &ItemForm {
        match self {
            Label::Case(item) => item,
            Label::Pallet(pallet) => &pallet.contents,
        }
    }

    pub fn sscc(&self) -> Option<&Sscc> {
        match self {
            Label::Case(_) => None,
            Label::Pallet(pallet) => Some(&pallet.sscc),
        }
    }

    /// Human-readable GS1 element string, e.g.
    /// `(01)12345678901234(10)L1(17)240101(37)5`
    pub fn element_string(&self) -> Result<String, LabelError> {
        let contents = self.item_element_string()?;
        Ok(match self.sscc() {
            Some(sscc) => format!("(00){}{}", sscc, contents),
            None => contents,
        })
    }

    /// Element string of the item line alone, without the `(00)` SSCC
    pub fn item_element_string(&self) -> Result<String, LabelError> {
        let item = self.contents();
        Ok(format!(
            "(01){}(10){}(17){}(37){}",
            item.gtin,
            item.lot,
            encode_expiry(&item.expiry)?,
            item.quantity
        ))
    }
}

/// Encodes an expiry date as AI (17) `YYMMDD`
///
/// The form only checks the `DD/MM/YYYY` shape, so dates such as
/// "31/02/2023" reach this point and are refused here.
pub fn encode_expiry(expiry: &ExpiryDate) -> Result<String, LabelError> {
    parse_calendar_date(expiry)
        .map(|date| date.format("%y%m%d").to_string())
        .ok_or_else(|| LabelError::InvalidExpiry(expiry.to_string()))
}

/// Barcode module width (`^BY`) that fits `element_string` into `width` dots
pub fn module_width(element_string: &str, width: u32) -> u32 {
    let chars = element_string.chars().count().max(1) as u64;
    let module = (2 * u64::from(width)) / (chars * DOTS_PER_CHAR);
    u32::try_from(module.max(1)).unwrap_or(u32::MAX)
}

/// ZPL rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZplOptions {
    /// Print width in dots (`^PW`)
    pub width: u32,
    /// Caption language
    pub lang: Lang,
}

impl Default for ZplOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_LABEL_WIDTH,
            lang: Lang::default(),
        }
    }
}

/// Renders every label as its own `^XA ... ^XZ` block
pub fn render_zpl(labels: &[Label], options: &ZplOptions) -> Result<String, LabelError> {
    let mut out = String::new();
    for label in labels {
        out.push_str(&render_label(label, options)?);
    }
    Ok(out)
}

fn render_label(label: &Label, options: &ZplOptions) -> Result<String, LabelError> {
    let item = label.contents();
    let lang = options.lang;
    let ais = label.element_string()?;
    let bar = module_width(&ais, options.width);
    debug!(kind = %label.kind(), element_string = %ais, module_width = bar, "rendering label");

    let mut body = String::new();
    let mut y = FIRST_ROW_Y;

    if let Some(sscc) = label.sscc() {
        text_line(&mut body, y, Caption::Sscc.text(lang), sscc);
        y += TEXT_ROW_HEIGHT;
        barcode(&mut body, y, bar, sscc);
        y += SSCC_BARCODE_HEIGHT;
    }

    text_line(&mut body, y, Caption::Gtin.text(lang), &item.gtin);
    y += TEXT_ROW_HEIGHT;
    text_line(&mut body, y, Caption::Lot.text(lang), &item.lot);
    y += TEXT_ROW_HEIGHT;
    text_line(&mut body, y, Caption::Expiry.text(lang), &item.expiry);
    y += TEXT_ROW_HEIGHT;
    text_line(&mut body, y, Caption::Quantity.text(lang), item.quantity);
    y += TEXT_ROW_HEIGHT;
    if let Some(description) = &item.description {
        text_line(&mut body, y, Caption::Description.text(lang), description);
        y += TEXT_ROW_HEIGHT;
    }
    if let Some(kg) = &item.net_weight_kg {
        text_line(&mut body, y, Caption::NetWeight.text(lang), format_args!("{} KG", kg));
        y += TEXT_ROW_HEIGHT;
    }

    barcode(&mut body, y, bar, &ais);

    let mut zpl = String::new();
    let _ = write!(
        zpl,
        "^XA\n^PW{}\n^LL{}\n^LH20,20\n^CI28\n^MNG\n^MMT\n^FT0,0^A0N,0,0\n",
        options.width, LABEL_LENGTH
    );
    zpl.push_str(&body);
    zpl.push_str("^XZ\n");
    Ok(zpl)
}

fn text_line(out: &mut String, y: u32, caption: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "^FO{},{}^A0N,35,35^FD{}: {}^FS", FIELD_X, y, caption, value);
}

fn barcode(out: &mut String, y: u32, module: u32, data: impl std::fmt::Display) {
    let _ = writeln!(
        out,
        "^FO{},{}^BY{},2,120^BCN,120,Y,N,N^FD{}^FS",
        FIELD_X, y, module, data
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> FormSnapshot {
        FormSnapshot::new()
            .with("gtin", "12345678901234")
            .with("lote", "L123")
            .with("fecha", "01/01/2024")
            .with("cantidad", "5")
    }

    #[test]
    fn test_case_element_string() {
        let label = Label::from_snapshot(FormKind::Item, &case()).unwrap();
        assert_eq!(
            label.element_string().unwrap(),
            "(01)12345678901234(10)L123(17)240101(37)5"
        );
    }

    #[test]
    fn test_pallet_element_string_starts_with_sscc() {
        let snapshot = case().with("sscc", "123456789012345678");
        let label = Label::from_snapshot(FormKind::Pallet, &snapshot).unwrap();
        assert_eq!(
            label.element_string().unwrap(),
            "(00)123456789012345678(01)12345678901234(10)L123(17)240101(37)5"
        );
    }

    #[test]
    fn test_shape_only_date_cannot_be_encoded() {
        let snapshot = case().with("fecha", "31/02/2023");
        let label = Label::from_snapshot(FormKind::Item, &snapshot).unwrap();
        assert!(matches!(
            label.element_string(),
            Err(LabelError::InvalidExpiry(date)) if date == "31/02/2023"
        ));
    }

    #[test]
    fn test_module_width() {
        // 41 chars * 22 = 902 dots estimated; 1600 / 902 = 1
        assert_eq!(module_width(&"x".repeat(41), 800), 1);
        // 10 chars * 22 = 220; 1600 / 220 = 7
        assert_eq!(module_width(&"x".repeat(10), 800), 7);
        assert_eq!(module_width(&"x".repeat(200), 800), 1);
    }

    #[test]
    fn test_module_width_counts_characters() {
        // "Ñ" is two bytes but one barcode character
        assert_eq!(module_width(&"Ñ".repeat(10), 800), 7);
        // 2 * u32::MAX overflows 32 bits: 8_589_934_590 / 22
        assert_eq!(module_width("x", u32::MAX), 390_451_572);
    }

    #[test]
    fn test_item_element_string_drops_sscc() {
        let snapshot = case().with("sscc", "123456789012345678");
        let label = Label::from_snapshot(FormKind::Pallet, &snapshot).unwrap();
        assert_eq!(
            label.item_element_string().unwrap(),
            "(01)12345678901234(10)L123(17)240101(37)5"
        );
    }
}
