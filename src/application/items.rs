//! Item business rules: uniqueness, patch semantics, outcome classification.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::repos::{ItemsRepo, RepoError};
use crate::domain::items::{ItemDraft, ItemPatch, ItemRecord, ItemValidationError};

const NAME_TAKEN: &str = "A item with this name already exists.";
const RENAME_TAKEN: &str = "Item with the updated name already exists.";
const UPDATE_TARGET_MISSING: &str = "Item to update not found.";
const DELETE_TARGET_MISSING: &str = "Item to delete not found.";

#[derive(Debug, Error)]
pub enum ItemServiceError {
    #[error(transparent)]
    Validation(#[from] ItemValidationError),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error(transparent)]
    Repo(RepoError),
}

pub struct ItemService {
    repo: Arc<dyn ItemsRepo>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemsRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<ItemRecord>, ItemServiceError> {
        self.repo.list_all().await.map_err(ItemServiceError::Repo)
    }

    pub async fn find(&self, name: &str) -> Result<Option<ItemRecord>, ItemServiceError> {
        self.repo
            .find_by_name(name)
            .await
            .map_err(ItemServiceError::Repo)
    }

    /// Validates the draft, checks the name is free, inserts. A concurrent
    /// create slipping past the pre-check loses at the store's unique
    /// constraint and is reported as the same conflict.
    pub async fn create(&self, draft: ItemDraft) -> Result<ItemRecord, ItemServiceError> {
        let item = draft.validate()?;

        let existing = self
            .repo
            .find_by_name(&item.item_name)
            .await
            .map_err(ItemServiceError::Repo)?;
        if existing.is_some() {
            return Err(ItemServiceError::Conflict(NAME_TAKEN));
        }

        match self.repo.create(item.into()).await {
            Ok(record) => {
                info!(target = "ritrova::items", item_name = %record.item_name, "item created");
                Ok(record)
            }
            Err(RepoError::Duplicate { .. }) => Err(ItemServiceError::Conflict(NAME_TAKEN)),
            Err(err) => Err(ItemServiceError::Repo(err)),
        }
    }

    /// Validates the patch, confirms the target exists (one explicit lookup),
    /// guards renames against taken names, merges. Renaming an item to its own
    /// current name is a no-op rename and allowed.
    pub async fn update(
        &self,
        name: &str,
        patch: ItemPatch,
    ) -> Result<ItemRecord, ItemServiceError> {
        let patch = patch.validate()?;

        let target = self
            .repo
            .find_by_name(name)
            .await
            .map_err(ItemServiceError::Repo)?;
        if target.is_none() {
            return Err(ItemServiceError::NotFound(UPDATE_TARGET_MISSING));
        }

        if let Some(new_name) = patch.new_name() {
            if new_name != name {
                let taken = self
                    .repo
                    .find_by_name(new_name)
                    .await
                    .map_err(ItemServiceError::Repo)?;
                if taken.is_some() {
                    return Err(ItemServiceError::Conflict(RENAME_TAKEN));
                }
            }
        }

        match self.repo.update(name, patch).await {
            Ok(Some(record)) => {
                info!(target = "ritrova::items", item_name = %record.item_name, "item updated");
                Ok(record)
            }
            Ok(None) => Err(ItemServiceError::NotFound(UPDATE_TARGET_MISSING)),
            Err(RepoError::Duplicate { .. }) => Err(ItemServiceError::Conflict(RENAME_TAKEN)),
            Err(err) => Err(ItemServiceError::Repo(err)),
        }
    }

    pub async fn delete(&self, name: &str) -> Result<ItemRecord, ItemServiceError> {
        match self
            .repo
            .delete(name)
            .await
            .map_err(ItemServiceError::Repo)?
        {
            Some(record) => {
                info!(target = "ritrova::items", item_name = %record.item_name, "item deleted");
                Ok(record)
            }
            None => Err(ItemServiceError::NotFound(DELETE_TARGET_MISSING)),
        }
    }
}
