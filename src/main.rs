use std::sync::Arc;

use anyhow::Context;
use item_service::config::{Config, StoreKind};
use item_service::db::{create_pool, init_schema};
use item_service::models::ItemSearchCond;
use item_service::repository::{ItemRepository, MemoryItemRepository, SqlItemRepository};
use item_service::seed::seed_sample_items;
use item_service::services::ItemService;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn ItemRepository>> {
    match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory item store");
            Ok(Arc::new(MemoryItemRepository::new()))
        }
        StoreKind::Sql => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(&config.database_url, config.max_connections)
                .await
                .context("failed to create database pool")?;
            init_schema(&pool)
                .await
                .context("failed to initialize schema")?;
            tracing::info!("Database connection established");
            Ok(Arc::new(SqlItemRepository::new(pool)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_service=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    tracing::info!(
        "Starting item-service: store={}, profile={}",
        config.store,
        config.profile
    );

    let service = ItemService::new(build_repository(&config).await?);

    if config.seeds_sample_data() {
        seed_sample_items(&service).await?;
    }

    let items = service.find_items(&ItemSearchCond::new()).await?;
    tracing::info!(
        "Catalog holds {} item(s): {}",
        items.len(),
        serde_json::to_string(&items)?
    );

    Ok(())
}
