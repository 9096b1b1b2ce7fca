//! Typed forms built from an accepted snapshot

use crate::rule::{
    check_rules, Field, FieldViolation, Rule, DESCRIPTION_FIELD, ITEM_RULES, LOT_FIELD,
    NET_WEIGHT_FIELD, PALLET_RULES,
};
use crate::snapshot::FormSnapshot;
use gs1_forms_types::{ExpiryDate, Gtin, Quantity, Sscc};
use serde::{Deserialize, Serialize};

/// Case/unit form contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub gtin: Gtin,
    pub lot: String,
    pub expiry: ExpiryDate,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_weight_kg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Pallet form: an SSCC plus the contents of one item line
///
/// `contents.quantity` counts cases on the pallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalletForm {
    pub sscc: Sscc,
    #[serde(flatten)]
    pub contents: ItemForm,
}

impl ItemForm {
    // Caller has already run the item rules over `snapshot`.
    fn from_checked(snapshot: &FormSnapshot) -> Result<Self, FieldViolation> {
        let gtin = Gtin::try_new(snapshot.get(Field::Gtin.name()).to_string())
            .map_err(|_| FieldViolation::new(Field::Gtin, Rule::GtinDigits))?;
        let expiry = ExpiryDate::try_new(snapshot.get(Field::Date.name()).to_string())
            .map_err(|_| FieldViolation::new(Field::Date, Rule::DateShape))?;
        let quantity = Quantity::from_field(snapshot.get(Field::Quantity.name()))
            .ok_or(FieldViolation::new(Field::Quantity, Rule::MinQuantity))?;

        Ok(Self {
            gtin,
            lot: snapshot.get(LOT_FIELD).trim().to_string(),
            expiry,
            quantity,
            net_weight_kg: snapshot.optional(NET_WEIGHT_FIELD).map(str::to_string),
            description: snapshot.optional(DESCRIPTION_FIELD).map(str::to_string),
        })
    }
}

impl TryFrom<&FormSnapshot> for ItemForm {
    type Error = FieldViolation;

    fn try_from(snapshot: &FormSnapshot) -> Result<Self, Self::Error> {
        check_rules(ITEM_RULES, snapshot)?;
        Self::from_checked(snapshot)
    }
}

impl TryFrom<&FormSnapshot> for PalletForm {
    type Error = FieldViolation;

    fn try_from(snapshot: &FormSnapshot) -> Result<Self, Self::Error> {
        check_rules(PALLET_RULES, snapshot)?;
        let sscc = Sscc::try_new(snapshot.get(Field::Sscc.name()).to_string())
            .map_err(|_| FieldViolation::new(Field::Sscc, Rule::SsccDigits))?;

        Ok(Self {
            sscc,
            contents: ItemForm::from_checked(snapshot)?,
        })
    }
}
