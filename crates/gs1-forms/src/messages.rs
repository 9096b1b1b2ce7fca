//! User-facing text in the supported languages

use crate::rule::Rule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "EN", alias = "en")]
    En,
    #[serde(rename = "ES", alias = "es")]
    Es,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Es => "ES",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(Lang::En),
            "ES" => Ok(Lang::Es),
            other => Err(format!("unsupported language '{}' (expected EN or ES)", other)),
        }
    }
}

/// Rejection message shown to the user when `rule` fails
pub fn message(rule: Rule, lang: Lang) -> &'static str {
    match (rule, lang) {
        (Rule::GtinDigits, Lang::En) => "GTIN must be 14 digits.",
        (Rule::GtinDigits, Lang::Es) => "GTIN debe tener 14 dígitos",
        (Rule::SsccDigits, Lang::En) => "SSCC must be 18 digits.",
        (Rule::SsccDigits, Lang::Es) => "SSCC debe tener 18 dígitos",
        (Rule::DateShape, Lang::En) => "Date must be DD/MM/YYYY.",
        (Rule::DateShape, Lang::Es) => "Fecha debe ser DD/MM/AAAA",
        (Rule::MinQuantity, Lang::En) => "Minimum quantity is 1.",
        (Rule::MinQuantity, Lang::Es) => "Cantidad mínima es 1",
        (Rule::Unexpired, Lang::En) => "Expiry date must be a valid date not in the past.",
        (Rule::Unexpired, Lang::Es) => "La fecha de caducidad debe ser válida y no anterior a hoy",
    }
}

/// Printed label captions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    Sscc,
    Gtin,
    Lot,
    Expiry,
    Quantity,
    /// Pallet quantity on PDF sheets
    CaseCount,
    Description,
    NetWeight,
}

impl Caption {
    pub fn text(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Caption::Sscc, _) => "SSCC",
            (Caption::Gtin, _) => "GTIN",
            (Caption::Lot, Lang::En) => "Lot",
            (Caption::Lot, Lang::Es) => "Lote",
            (Caption::Expiry, Lang::En) => "Expiry date",
            (Caption::Expiry, Lang::Es) => "Fecha caducidad",
            (Caption::Quantity, Lang::En) => "Quantity",
            (Caption::Quantity, Lang::Es) => "Cantidad",
            (Caption::CaseCount, Lang::En) => "Cases",
            (Caption::CaseCount, Lang::Es) => "Cantidad de cajas",
            (Caption::Description, Lang::En) => "Description",
            (Caption::Description, Lang::Es) => "Descripción",
            (Caption::NetWeight, Lang::En) => "Net weight",
            (Caption::NetWeight, Lang::Es) => "Peso neto",
        }
    }
}
