//! Item repositories.
//!
//! `ItemRepository` is the storage seam; the service layer only ever talks to
//! a `dyn ItemRepository`, so the in-memory and SQL variants are interchangeable.

pub mod memory;
pub mod sql;

pub use memory::MemoryItemRepository;
pub use sql::SqlItemRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Item, ItemSearchCond, ItemUpdateDto};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists `item` under a freshly assigned identifier and returns it.
    ///
    /// Any identifier already set on `item` is discarded.
    async fn create(&self, item: Item) -> AppResult<Item>;

    /// Replaces name, price and quantity of an existing item.
    ///
    /// Fails with `AppError::NotFound` when `item_id` does not exist.
    async fn update(&self, item_id: i64, update_param: ItemUpdateDto) -> AppResult<()>;

    /// Returns `Ok(None)` for an unknown identifier.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>>;

    /// Lists items matching `cond`. No ordering is guaranteed.
    async fn find_all(&self, cond: &ItemSearchCond) -> AppResult<Vec<Item>>;
}

#[cfg(test)]
pub(crate) mod contract {
    //! Scenarios every repository variant must pass.

    use std::collections::HashSet;
    use std::sync::Arc;

    use super::ItemRepository;
    use crate::models::{Item, ItemSearchCond, ItemUpdateDto};

    fn sorted_names(items: &[Item]) -> Vec<String> {
        let mut names: Vec<String> = items
            .iter()
            .filter_map(|item| item.item_name.clone())
            .collect();
        names.sort();
        names
    }

    pub async fn create_and_find(repo: &dyn ItemRepository) {
        let saved = repo.create(Item::new("itemA", 10000, 10)).await.unwrap();
        let id = saved.id.expect("id assigned");

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    pub async fn create_discards_caller_id(repo: &dyn ItemRepository) {
        let first = repo.create(Item::new("first", 1, 1)).await.unwrap();
        let mut candidate = Item::new("second", 2, 2);
        candidate.id = first.id;

        let second = repo.create(candidate).await.unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(
            repo.find_by_id(first.id.unwrap()).await.unwrap().unwrap().item_name.as_deref(),
            Some("first")
        );
    }

    pub async fn create_keeps_absent_fields(repo: &dyn ItemRepository) {
        let saved = repo.create(Item::default()).await.unwrap();
        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.item_name, None);
        assert_eq!(found.price, None);
        assert_eq!(found.quantity, None);
    }

    pub async fn update_replaces_all_fields(repo: &dyn ItemRepository) {
        let saved = repo.create(Item::new("item1", 10000, 10)).await.unwrap();
        let id = saved.id.unwrap();

        repo.update(id, ItemUpdateDto::new("item2", 20000, 30))
            .await
            .unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.item_name.as_deref(), Some("item2"));
        assert_eq!(found.price, Some(20000));
        assert_eq!(found.quantity, Some(30));

        repo.update(id, ItemUpdateDto::default()).await.unwrap();
        let cleared = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(cleared, Item { id: Some(id), ..Item::default() });
    }

    pub async fn update_missing_is_not_found(repo: &dyn ItemRepository) {
        let saved = repo.create(Item::new("itemA", 10000, 10)).await.unwrap();

        let err = repo
            .update(saved.id.unwrap() + 1000, ItemUpdateDto::new("x", 1, 1))
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let all = repo.find_all(&ItemSearchCond::new()).await.unwrap();
        assert_eq!(all, vec![saved]);
    }

    pub async fn find_by_unknown_id_is_absent(repo: &dyn ItemRepository) {
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
        assert_eq!(repo.find_by_id(-1).await.unwrap(), None);
    }

    pub async fn find_all_filters(repo: &dyn ItemRepository) {
        repo.create(Item::new("itemA-1", 10000, 10)).await.unwrap();
        repo.create(Item::new("itemA-2", 20000, 20)).await.unwrap();
        repo.create(Item::new("itemB-1", 30000, 30)).await.unwrap();

        let cases = [
            (ItemSearchCond::new(), vec!["itemA-1", "itemA-2", "itemB-1"]),
            (
                ItemSearchCond::new().with_item_name(""),
                vec!["itemA-1", "itemA-2", "itemB-1"],
            ),
            (ItemSearchCond::new().with_item_name("itemA"), vec!["itemA-1", "itemA-2"]),
            (ItemSearchCond::new().with_item_name("temA"), vec!["itemA-1", "itemA-2"]),
            (ItemSearchCond::new().with_item_name("ITEMA"), vec![]),
            (ItemSearchCond::new().with_max_price(10000), vec!["itemA-1"]),
            (
                ItemSearchCond::new().with_item_name("itemA").with_max_price(10000),
                vec!["itemA-1"],
            ),
            (ItemSearchCond::new().with_max_price(9999), vec![]),
        ];

        for (cond, expected) in cases {
            let found = repo.find_all(&cond).await.unwrap();
            assert_eq!(sorted_names(&found), expected, "cond = {:?}", cond);
        }
    }

    pub async fn find_all_treats_wildcards_literally(repo: &dyn ItemRepository) {
        repo.create(Item::new("50%off", 100, 1)).await.unwrap();
        repo.create(Item::new("500off", 100, 1)).await.unwrap();

        let found = repo
            .find_all(&ItemSearchCond::new().with_item_name("%"))
            .await
            .unwrap();
        assert_eq!(sorted_names(&found), vec!["50%off"]);
    }

    pub async fn concurrent_creates_get_distinct_ids(repo: Arc<dyn ItemRepository>) {
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(Item::new(format!("item{}", i), i, i))
                    .await
                    .unwrap()
                    .id
                    .unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 32);
    }
}
