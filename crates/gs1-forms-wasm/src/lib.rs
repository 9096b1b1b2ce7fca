//! GS1 Forms WASM
//!
//! WebAssembly bindings for the case and pallet form validator.
//! Runs the same rules in the browser as on the server.
//!
//! # Example (HTML)
//! ```html
//! <form onsubmit="return validatePalletForm()">
//!   <input name="sscc"> <input name="gtin">
//!   <input name="fecha"> <input name="cantidad">
//! </form>
//! ```

use gs1_forms::validation as rules;
use gs1_forms::{FormKind, FormSnapshot, FormValidator, Lang, Notifier};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Shows rejection messages with a blocking `window.alert()`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            web_sys::console::warn_1(&JsValue::from_str(message));
        }
    }
}

/// Outcome returned to JavaScript by `validateFields`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validate the case/unit form on the current page
///
/// Reads `input[name=gtin|fecha|cantidad]` and alerts on the first failing
/// rule. Return the result from the form's `onsubmit` handler to block the
/// submission.
#[wasm_bindgen(js_name = validateItemForm)]
pub fn validate_item_form() -> bool {
    validate_page_form(FormKind::Item)
}

/// Validate the pallet form on the current page (`sscc` checked first)
#[wasm_bindgen(js_name = validatePalletForm)]
pub fn validate_pallet_form() -> bool {
    validate_page_form(FormKind::Pallet)
}

fn validate_page_form(kind: FormKind) -> bool {
    let snapshot = read_page_form(kind);
    FormValidator::new(page_lang()).validate(kind, &snapshot, &AlertNotifier)
}

/// Validate a plain object of field values without alerting
///
/// # Arguments
/// * `kind` - `"item"` or `"pallet"`
/// * `fields` - object mapping input names to values
/// * `lang` - `"EN"` (default) or `"ES"`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateFields('item', {
///     gtin: '12345678901234',
///     fecha: '01/01/2024',
///     cantidad: '0'
/// });
/// // { valid: false, field: 'cantidad', message: 'Minimum quantity is 1.' }
/// ```
#[wasm_bindgen(js_name = validateFields)]
pub fn validate_fields(
    kind: &str,
    fields: JsValue,
    lang: Option<String>,
) -> Result<JsValue, JsValue> {
    let kind: FormKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let lang: Lang = match lang {
        Some(code) => code.parse().map_err(|e: String| JsValue::from_str(&e))?,
        None => Lang::default(),
    };
    let snapshot: FormSnapshot = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;

    let result = match FormValidator::new(lang).check(kind, &snapshot) {
        Ok(()) => ValidationResult {
            valid: true,
            field: None,
            message: None,
        },
        Err(violation) => ValidationResult {
            valid: false,
            field: Some(violation.field.name().to_string()),
            message: Some(violation.message(lang).to_string()),
        },
    };

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Quick GTIN validation
#[wasm_bindgen(js_name = isValidGtin)]
pub fn is_valid_gtin_js(gtin: &str) -> bool {
    rules::is_valid_gtin(gtin)
}

/// Quick SSCC validation
#[wasm_bindgen(js_name = isValidSscc)]
pub fn is_valid_sscc_js(sscc: &str) -> bool {
    rules::is_valid_sscc(sscc)
}

/// Quick date shape validation
#[wasm_bindgen(js_name = isValidDate)]
pub fn is_valid_date_js(date: &str) -> bool {
    rules::is_date_shape(date)
}

/// Quick quantity validation
#[wasm_bindgen(js_name = isValidQuantity)]
pub fn is_valid_quantity_js(quantity: &str) -> bool {
    rules::is_valid_quantity(quantity)
}

// -----------------------------------------------------------------------------
// DOM access
// -----------------------------------------------------------------------------

fn read_page_form(kind: FormKind) -> FormSnapshot {
    let mut snapshot = FormSnapshot::new();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return snapshot;
    };

    for rule in kind.rules() {
        let name = rule.field.name();
        if let Some(value) = input_value(&document, name) {
            snapshot.insert(name, value);
        }
    }
    snapshot
}

fn input_value(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("input[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok().flatten()?;
    element
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

/// Message language from `<html lang="...">`, English when unset
fn page_lang() -> Lang {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("lang"))
        .and_then(|code| code.get(..2).and_then(|prefix| prefix.parse().ok()))
        .unwrap_or_default()
}
