//! The item entity and its validation rules.
//!
//! Validation is predicate-table driven: every field of the wire payload has a
//! documented presence predicate, and "present" deliberately means carrying a
//! meaningful value. Blank strings and zero numbers do not count. Callers
//! that want to store a zero quantity can, but only as part of an update that
//! names at least one meaningful field.

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// An inventory item as persisted. `item_name` is the external identifier;
/// `id` is a storage-internal surrogate and never used for lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    pub id: Uuid,
    pub item_name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub supplier: String,
    pub location: String,
    pub expiration_date: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemValidationError {
    #[error("Missing data, make sure you fill all the required fields.")]
    MissingRequiredFields,
    #[error("Incomplete data for update.")]
    EmptyUpdate,
    #[error("Quantity and unit price must be positive numbers.")]
    NumericOutOfRange,
}

/// Field table. `required` applies to creation; every field is optional on
/// update. Presence predicates are in [`text_present`] / [`number_present`].
///
/// | field             | kind   | required on create |
/// |-------------------|--------|--------------------|
/// | `item_name`       | text   | yes                |
/// | `category`        | text   | yes                |
/// | `unit_price`      | number | yes                |
/// | `quantity`        | number | yes                |
/// | `supplier`        | text   | yes                |
/// | `location`        | text   | yes                |
/// | `expiration_date` | text   | no (update only)   |
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

pub const ITEM_FIELDS: &[FieldRule] = &[
    FieldRule { name: "item_name", kind: FieldKind::Text, required: true },
    FieldRule { name: "category", kind: FieldKind::Text, required: true },
    FieldRule { name: "unit_price", kind: FieldKind::Number, required: true },
    FieldRule { name: "quantity", kind: FieldKind::Number, required: true },
    FieldRule { name: "supplier", kind: FieldKind::Text, required: true },
    FieldRule { name: "location", kind: FieldKind::Text, required: true },
    FieldRule { name: "expiration_date", kind: FieldKind::Text, required: false },
];

/// A text field is present when it holds a non-blank value.
pub fn text_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// A numeric field is present when it holds a finite, non-zero value.
pub fn number_present(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v != 0.0)
}

/// Range check applied to every numeric value that is actually supplied,
/// on create and update alike: finite and non-negative.
pub fn number_in_range(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Raw creation payload before validation. Fields mirror the wire shape,
/// so a missing JSON key surfaces here as `None` rather than as a decode
/// error with a foreign message.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

/// A validated creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub item_name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub supplier: String,
    pub location: String,
}

impl ItemDraft {
    /// Checks every required field against its presence predicate, then the
    /// numeric range invariant.
    pub fn validate(self) -> Result<NewItem, ItemValidationError> {
        let required_present = text_present(self.item_name.as_deref())
            && text_present(self.category.as_deref())
            && text_present(self.supplier.as_deref())
            && text_present(self.location.as_deref())
            && number_present(self.unit_price)
            && number_present(self.quantity);
        if !required_present {
            return Err(ItemValidationError::MissingRequiredFields);
        }

        let unit_price = self.unit_price.unwrap_or_default();
        let quantity = self.quantity.unwrap_or_default();
        if !number_in_range(unit_price) || !number_in_range(quantity) {
            return Err(ItemValidationError::NumericOutOfRange);
        }

        Ok(NewItem {
            item_name: self.item_name.unwrap_or_default().trim().to_string(),
            category: self.category.unwrap_or_default(),
            unit_price,
            quantity,
            supplier: self.supplier.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
        })
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub supplier: Option<String>,
    pub location: Option<String>,
    pub expiration_date: Option<String>,
}

impl ItemPatch {
    /// Validates the patch: blank strings are normalized to absent, at least
    /// one field must be present per the predicate table, and any supplied
    /// numeric must be in range. Supplied zeros are kept: presence counting
    /// ignores them, application does not.
    pub fn validate(mut self) -> Result<Self, ItemValidationError> {
        normalize_text(&mut self.item_name);
        normalize_text(&mut self.category);
        normalize_text(&mut self.supplier);
        normalize_text(&mut self.location);
        normalize_text(&mut self.expiration_date);
        if let Some(name) = self.item_name.as_mut() {
            *name = name.trim().to_string();
        }

        let names_a_field = self.item_name.is_some()
            || self.category.is_some()
            || self.supplier.is_some()
            || self.location.is_some()
            || self.expiration_date.is_some()
            || number_present(self.unit_price)
            || number_present(self.quantity);
        if !names_a_field {
            return Err(ItemValidationError::EmptyUpdate);
        }

        let numerics_in_range = self.unit_price.is_none_or(number_in_range)
            && self.quantity.is_none_or(number_in_range);
        if !numerics_in_range {
            return Err(ItemValidationError::NumericOutOfRange);
        }

        Ok(self)
    }

    /// The name this patch renames the item to, if it names one.
    pub fn new_name(&self) -> Option<&str> {
        self.item_name.as_deref()
    }
}

fn normalize_text(value: &mut Option<String>) {
    if !text_present(value.as_deref()) {
        *value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ItemDraft {
        ItemDraft {
            item_name: Some("Water".into()),
            category: Some("Core".into()),
            unit_price: Some(2.8),
            quantity: Some(100.0),
            supplier: Some("Sami".into()),
            location: Some("Israel".into()),
        }
    }

    #[test]
    fn draft_with_all_fields_validates() {
        let item = full_draft().validate().expect("valid draft");
        assert_eq!(item.item_name, "Water");
        assert_eq!(item.quantity, 100.0);
    }

    #[test]
    fn draft_missing_any_required_field_is_rejected() {
        let mut draft = full_draft();
        draft.supplier = None;
        assert_eq!(
            draft.validate(),
            Err(ItemValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn blank_text_counts_as_absent() {
        let mut draft = full_draft();
        draft.location = Some("   ".into());
        assert_eq!(
            draft.validate(),
            Err(ItemValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn zero_numeric_counts_as_absent_on_create() {
        let mut draft = full_draft();
        draft.quantity = Some(0.0);
        assert_eq!(
            draft.validate(),
            Err(ItemValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn negative_numeric_is_rejected_on_create() {
        let mut draft = full_draft();
        draft.unit_price = Some(-2.8);
        assert_eq!(draft.validate(), Err(ItemValidationError::NumericOutOfRange));
    }

    #[test]
    fn item_name_is_trimmed() {
        let mut draft = full_draft();
        draft.item_name = Some("  Water  ".into());
        let item = draft.validate().expect("valid draft");
        assert_eq!(item.item_name, "Water");
    }

    #[test]
    fn empty_patch_is_rejected() {
        assert_eq!(
            ItemPatch::default().validate(),
            Err(ItemValidationError::EmptyUpdate)
        );
    }

    #[test]
    fn lone_zero_quantity_does_not_count_as_an_update() {
        let patch = ItemPatch {
            quantity: Some(0.0),
            ..ItemPatch::default()
        };
        assert_eq!(patch.validate(), Err(ItemValidationError::EmptyUpdate));
    }

    #[test]
    fn zero_quantity_is_kept_when_another_field_is_named() {
        let patch = ItemPatch {
            quantity: Some(0.0),
            category: Some("Archive".into()),
            ..ItemPatch::default()
        }
        .validate()
        .expect("valid patch");
        assert_eq!(patch.quantity, Some(0.0));
    }

    #[test]
    fn negative_quantity_is_rejected_on_update() {
        let patch = ItemPatch {
            quantity: Some(-5.0),
            category: Some("Core".into()),
            ..ItemPatch::default()
        };
        assert_eq!(patch.validate(), Err(ItemValidationError::NumericOutOfRange));
    }

    #[test]
    fn non_finite_unit_price_is_rejected_on_update() {
        let patch = ItemPatch {
            unit_price: Some(f64::INFINITY),
            category: Some("Core".into()),
            ..ItemPatch::default()
        };
        assert_eq!(patch.validate(), Err(ItemValidationError::NumericOutOfRange));
    }

    #[test]
    fn blank_rename_is_normalized_to_absent() {
        let patch = ItemPatch {
            item_name: Some("".into()),
            category: Some("Core".into()),
            ..ItemPatch::default()
        }
        .validate()
        .expect("valid patch");
        assert_eq!(patch.new_name(), None);
    }

    #[test]
    fn field_table_matches_wire_shape() {
        assert_eq!(ITEM_FIELDS.len(), 7);
        assert_eq!(
            ITEM_FIELDS.iter().filter(|f| f.required).count(),
            6,
            "expiration_date is the only optional field"
        );
    }
}
