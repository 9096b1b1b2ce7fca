//! Field rules and the rule sets of each form variant
//!
//! A rule is a pure predicate bound to one form field. The item and pallet
//! forms share the GTIN, date and quantity rules; each form is just an
//! ordered slice of rules, evaluated until the first failure.

use crate::messages::{self, Lang};
use crate::snapshot::FormSnapshot;
use gs1_forms_validation as predicates;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lot number input
pub const LOT_FIELD: &str = "lote";
/// Net weight (kg) input
pub const NET_WEIGHT_FIELD: &str = "peso";
/// Free-text description input
pub const DESCRIPTION_FIELD: &str = "descripcion";

/// Validated form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Sscc,
    Gtin,
    Date,
    Quantity,
}

impl Field {
    /// Input name in the submitted form
    pub fn name(self) -> &'static str {
        match self {
            Field::Sscc => "sscc",
            Field::Gtin => "gtin",
            Field::Date => "fecha",
            Field::Quantity => "cantidad",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which check a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    GtinDigits,
    SsccDigits,
    DateShape,
    MinQuantity,
    Unexpired,
}

impl Rule {
    pub fn message(self, lang: Lang) -> &'static str {
        messages::message(self, lang)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Lang::En))
    }
}

/// Field format violation: the single error kind of form validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{rule}")]
pub struct FieldViolation {
    pub field: Field,
    pub rule: Rule,
}

impl FieldViolation {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// Localized rejection message
    pub fn message(&self, lang: Lang) -> &'static str {
        self.rule.message(lang)
    }
}

/// A fixed check over one field's string value
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub rule: Rule,
    check: fn(&str) -> bool,
}

impl FieldRule {
    pub const fn new(field: Field, rule: Rule, check: fn(&str) -> bool) -> Self {
        Self { field, rule, check }
    }

    pub fn accepts(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Applies the rule to its field in `snapshot`
    pub fn apply(&self, snapshot: &FormSnapshot) -> Result<(), FieldViolation> {
        if self.accepts(snapshot.get(self.field.name())) {
            Ok(())
        } else {
            Err(FieldViolation::new(self.field, self.rule))
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

pub const GTIN_RULE: FieldRule =
    FieldRule::new(Field::Gtin, Rule::GtinDigits, predicates::is_valid_gtin);

pub const SSCC_RULE: FieldRule =
    FieldRule::new(Field::Sscc, Rule::SsccDigits, predicates::is_valid_sscc);

pub const DATE_RULE: FieldRule =
    FieldRule::new(Field::Date, Rule::DateShape, predicates::is_date_shape);

pub const QUANTITY_RULE: FieldRule =
    FieldRule::new(Field::Quantity, Rule::MinQuantity, predicates::is_valid_quantity);

/// Case/unit form: GTIN, date, quantity
pub const ITEM_RULES: &[FieldRule] = &[GTIN_RULE, DATE_RULE, QUANTITY_RULE];

/// Pallet form: SSCC first, then the item rules
pub const PALLET_RULES: &[FieldRule] = &[SSCC_RULE, GTIN_RULE, DATE_RULE, QUANTITY_RULE];

/// Runs `rules` in order and stops at the first violation
pub fn check_rules(rules: &[FieldRule], snapshot: &FormSnapshot) -> Result<(), FieldViolation> {
    rules.iter().try_for_each(|rule| rule.apply(snapshot))
}
