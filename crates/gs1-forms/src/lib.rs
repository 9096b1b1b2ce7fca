//! # gs1-forms
//!
//! Submission gate for the two forms of a GS1 logistics labelling tool: the
//! case/unit ("item") form and the pallet form. Fields are checked against
//! fixed rules before the submission goes through; the first failing rule
//! is shown to the user through an injected [`Notifier`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gs1_forms::{validate_pallet_form, FormSnapshot, RecordingNotifier};
//!
//! let fields = FormSnapshot::new()
//!     .with("sscc", "bad")
//!     .with("gtin", "12345678901234")
//!     .with("fecha", "01/01/2024")
//!     .with("cantidad", "2");
//!
//! let notifier = RecordingNotifier::new();
//! assert!(!validate_pallet_form(&fields, &notifier));
//! assert_eq!(notifier.messages(), vec!["SSCC must be 18 digits."]);
//! ```
//!
//! ## Rules
//!
//! | Field      | Rule                                  | Item | Pallet |
//! |------------|---------------------------------------|------|--------|
//! | `sscc`     | exactly 18 digits                     |      | 1st    |
//! | `gtin`     | exactly 14 digits                     | 1st  | 2nd    |
//! | `fecha`    | `DD/MM/YYYY` shape, no calendar check | 2nd  | 3rd    |
//! | `cantidad` | leading integer >= 1                  | 3rd  | 4th    |
//!
//! ## Architecture
//!
//! - **`gs1-forms-validation`** - pure predicates (re-exported as [`validation`])
//! - **`gs1-forms-types`** - nutype validated types (re-exported as [`types`])
//! - this crate - rule sets, validator, notifier, typed forms, labels (ZPL
//!   and PDF), config

pub mod config;
pub mod form;
pub mod label;
pub mod messages;
pub mod notifier;
pub mod pdf;
pub mod rule;
pub mod snapshot;
pub mod validator;

pub use gs1_forms_types as types;
pub use gs1_forms_validation as validation;

pub use config::Config;
pub use form::{ItemForm, PalletForm};
pub use label::{render_zpl, Label, LabelError, ZplOptions};
pub use messages::Lang;
pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
pub use pdf::{layout_pdf, render_pdf, PdfItem, PdfPage};
pub use rule::{Field, FieldRule, FieldViolation, Rule};
pub use snapshot::FormSnapshot;
pub use validator::{
    check_item_form, check_pallet_form, validate_item_form, validate_pallet_form, FormKind,
    FormValidator,
};
