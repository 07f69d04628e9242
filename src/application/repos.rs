//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::items::{ItemPatch, ItemRecord, NewItem};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub item_name: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub supplier: String,
    pub location: String,
}

impl From<NewItem> for CreateItemParams {
    fn from(item: NewItem) -> Self {
        Self {
            item_name: item.item_name,
            category: item.category,
            unit_price: item.unit_price,
            quantity: item.quantity,
            supplier: item.supplier,
            location: item.location,
        }
    }
}

/// Store operations for items. Pass-throughs only: uniqueness pre-checks and
/// payload validation live in the service layer, while the store's own unique
/// constraint still surfaces as [`RepoError::Duplicate`].
#[async_trait]
pub trait ItemsRepo: Send + Sync {
    /// Every item; an empty store is an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<ItemRecord>, RepoError>;

    /// Case-sensitive lookup by external name.
    async fn find_by_name(&self, name: &str) -> Result<Option<ItemRecord>, RepoError>;

    /// Inserts and returns the record as persisted.
    async fn create(&self, params: CreateItemParams) -> Result<ItemRecord, RepoError>;

    /// Partial merge into the record matching `name`; `None` when no record
    /// matched. Returns the post-update record.
    async fn update(&self, name: &str, patch: ItemPatch) -> Result<Option<ItemRecord>, RepoError>;

    /// Removes the record matching `name`, returning it; `None` when absent.
    async fn delete(&self, name: &str) -> Result<Option<ItemRecord>, RepoError>;
}
