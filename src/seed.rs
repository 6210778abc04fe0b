use crate::error::AppResult;
use crate::models::Item;
use crate::services::ItemService;

/// Loads the sample catalog used by the `local` profile.
pub async fn seed_sample_items(service: &ItemService) -> AppResult<Vec<Item>> {
    tracing::info!("loading sample items");

    let mut seeded = Vec::with_capacity(2);
    for item in [Item::new("itemA", 10000, 10), Item::new("itemB", 20000, 20)] {
        seeded.push(service.save(item).await?);
    }
    Ok(seeded)
}
