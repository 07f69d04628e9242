use serde::{Deserialize, Serialize};

use crate::domain::items::{ItemDraft, ItemPatch};

/// Creation payload. Every field is optional at the wire so that presence is
/// judged by the domain predicate table, not by serde's missing-field errors.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ItemCreateRequest {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

impl From<ItemCreateRequest> for ItemDraft {
    fn from(payload: ItemCreateRequest) -> Self {
        Self {
            item_name: payload.item_name,
            category: payload.category,
            unit_price: payload.unit_price,
            quantity: payload.quantity,
            supplier: payload.supplier,
            location: payload.location,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ItemUpdateRequest {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub supplier: Option<String>,
    pub location: Option<String>,
    pub expiration_date: Option<String>,
}

impl From<ItemUpdateRequest> for ItemPatch {
    fn from(payload: ItemUpdateRequest) -> Self {
        Self {
            item_name: payload.item_name,
            category: payload.category,
            unit_price: payload.unit_price,
            quantity: payload.quantity,
            supplier: payload.supplier,
            location: payload.location,
            expiration_date: payload.expiration_date,
        }
    }
}
