//! Form Field Validator
//!
//! Accept/reject gate for the case and pallet forms. The pure `check_*`
//! functions report the first violated rule; the `validate_*` functions turn
//! that into a boolean and exactly one notification on rejection.
//!
//! ```rust,ignore
//! use gs1_forms::{validate_item_form, FormSnapshot, RecordingNotifier};
//!
//! let fields = FormSnapshot::new()
//!     .with("gtin", "12345678901234")
//!     .with("fecha", "01/01/2024")
//!     .with("cantidad", "1");
//! let notifier = RecordingNotifier::new();
//! assert!(validate_item_form(&fields, &notifier));
//! ```

use crate::messages::Lang;
use crate::notifier::Notifier;
use crate::rule::{check_rules, Field, FieldRule, FieldViolation, Rule, ITEM_RULES, PALLET_RULES};
use crate::snapshot::FormSnapshot;
use chrono::NaiveDate;
use gs1_forms_validation::is_unexpired_date;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Form variant being submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Case/unit form ("caja")
    #[serde(alias = "caja")]
    Item,
    Pallet,
}

impl FormKind {
    /// Ordered rule set of this form
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            FormKind::Item => ITEM_RULES,
            FormKind::Pallet => PALLET_RULES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Item => "item",
            FormKind::Pallet => "pallet",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" | "caja" | "case" => Ok(FormKind::Item),
            "pallet" => Ok(FormKind::Pallet),
            other => Err(format!("unknown form kind '{}' (expected item or pallet)", other)),
        }
    }
}

/// Validator with a message language and an optional expiry check
///
/// The default validator uses English messages and the plain rule sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidator {
    lang: Lang,
    expiry_today: Option<NaiveDate>,
}

impl FormValidator {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            expiry_today: None,
        }
    }

    /// Additionally rejects dates that are not real calendar dates or fall
    /// before `today`. Runs after every rule of the form has passed.
    pub fn with_expiry_check(mut self, today: NaiveDate) -> Self {
        self.expiry_today = Some(today);
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// First violation of `kind`'s rules, without notifying anyone
    pub fn check(&self, kind: FormKind, snapshot: &FormSnapshot) -> Result<(), FieldViolation> {
        check_rules(kind.rules(), snapshot)?;

        if let Some(today) = self.expiry_today {
            if !is_unexpired_date(snapshot.get(Field::Date.name()), today) {
                return Err(FieldViolation::new(Field::Date, Rule::Unexpired));
            }
        }

        Ok(())
    }

    /// Accepts or rejects a submission
    ///
    /// On rejection the first violated rule's message is passed to `notifier`
    /// exactly once; on acceptance `notifier` is not called.
    pub fn validate<N: Notifier + ?Sized>(
        &self,
        kind: FormKind,
        snapshot: &FormSnapshot,
        notifier: &N,
    ) -> bool {
        match self.check(kind, snapshot) {
            Ok(()) => {
                trace!(form = %kind, "form accepted");
                true
            }
            Err(violation) => {
                debug!(
                    form = %kind,
                    field = %violation.field,
                    rule = ?violation.rule,
                    "form rejected"
                );
                notifier.notify(violation.message(self.lang));
                false
            }
        }
    }
}

/// Validates the case/unit form: GTIN, date, quantity
pub fn validate_item_form<N: Notifier + ?Sized>(fields: &FormSnapshot, notifier: &N) -> bool {
    FormValidator::default().validate(FormKind::Item, fields, notifier)
}

/// Validates the pallet form: SSCC, GTIN, date, quantity
pub fn validate_pallet_form<N: Notifier + ?Sized>(fields: &FormSnapshot, notifier: &N) -> bool {
    FormValidator::default().validate(FormKind::Pallet, fields, notifier)
}

pub fn check_item_form(fields: &FormSnapshot) -> Result<(), FieldViolation> {
    check_rules(ITEM_RULES, fields)
}

pub fn check_pallet_form(fields: &FormSnapshot) -> Result<(), FieldViolation> {
    check_rules(PALLET_RULES, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::RecordingNotifier;

    fn valid_item() -> FormSnapshot {
        FormSnapshot::new()
            .with("gtin", "12345678901234")
            .with("fecha", "01/01/2024")
            .with("cantidad", "1")
    }

    #[test]
    fn test_form_kind_parse() {
        assert_eq!("item".parse::<FormKind>(), Ok(FormKind::Item));
        assert_eq!("caja".parse::<FormKind>(), Ok(FormKind::Item));
        assert_eq!("Pallet".parse::<FormKind>(), Ok(FormKind::Pallet));
        assert!("box".parse::<FormKind>().is_err());
    }

    #[test]
    fn test_spanish_validator() {
        let notifier = RecordingNotifier::new();
        let fields = valid_item().with("cantidad", "0");
        assert!(!FormValidator::new(Lang::Es).validate(FormKind::Item, &fields, &notifier));
        assert_eq!(notifier.messages(), vec!["Cantidad mínima es 1"]);
    }

    #[test]
    fn test_expiry_check_is_opt_in() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let fields = valid_item();

        assert!(FormValidator::default().check(FormKind::Item, &fields).is_ok());
        assert_eq!(
            FormValidator::default()
                .with_expiry_check(today)
                .check(FormKind::Item, &fields),
            Err(FieldViolation::new(Field::Date, Rule::Unexpired))
        );

        let future = valid_item().with("fecha", "31/12/2027");
        assert!(FormValidator::default()
            .with_expiry_check(today)
            .check(FormKind::Item, &future)
            .is_ok());
    }

    #[test]
    fn test_expiry_check_runs_after_form_rules() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let fields = valid_item().with("cantidad", "0");
        assert_eq!(
            FormValidator::default()
                .with_expiry_check(today)
                .check(FormKind::Item, &fields),
            Err(FieldViolation::new(Field::Quantity, Rule::MinQuantity))
        );
    }

    #[test]
    fn test_validator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormValidator>();
        assert_send_sync::<RecordingNotifier>();
    }
}
