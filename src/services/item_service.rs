use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{Item, ItemSearchCond, ItemUpdateDto};
use crate::repository::ItemRepository;

/// Application-facing entry point for the catalog.
#[derive(Clone)]
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn save(&self, item: Item) -> AppResult<Item> {
        if item.id.is_some() {
            tracing::debug!("ignoring caller-supplied id {:?} on save", item.id);
        }

        let saved = self.repository.create(item).await?;
        tracing::info!(
            "saved item: id={:?}, item_name={:?}",
            saved.id,
            saved.item_name
        );
        Ok(saved)
    }

    pub async fn update(&self, item_id: i64, update_param: ItemUpdateDto) -> AppResult<()> {
        match self.repository.update(item_id, update_param).await {
            Ok(()) => {
                tracing::info!("updated item: id={}", item_id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("update of item {} failed: {}", item_id, e);
                Err(e)
            }
        }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_items(&self, cond: &ItemSearchCond) -> AppResult<Vec<Item>> {
        self.repository.find_all(cond).await
    }
}
