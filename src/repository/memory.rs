use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ItemRepository;
use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemSearchCond, ItemUpdateDto};

#[derive(Debug, Default)]
struct MemoryState {
    store: BTreeMap<i64, Item>,
    sequence: i64,
}

/// Process-local repository. The map and the id sequence share one lock, so
/// id assignment and insertion happen atomically.
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    state: Mutex<MemoryState>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every stored item. The id sequence keeps counting.
    pub async fn clear_store(&self) {
        self.state.lock().await.store.clear();
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn create(&self, mut item: Item) -> AppResult<Item> {
        let mut state = self.state.lock().await;
        state.sequence += 1;
        let id = state.sequence;

        item.id = Some(id);
        state.store.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, item_id: i64, update_param: ItemUpdateDto) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let item = state
            .store
            .get_mut(&item_id)
            .ok_or_else(|| AppError::NotFound(format!("item {}", item_id)))?;

        item.apply(&update_param);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        Ok(self.state.lock().await.store.get(&id).cloned())
    }

    async fn find_all(&self, cond: &ItemSearchCond) -> AppResult<Vec<Item>> {
        let state = self.state.lock().await;
        Ok(state
            .store
            .values()
            .filter(|item| cond.matches(item))
            .cloned()
            .collect())
    }
}
