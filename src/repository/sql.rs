use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::ItemRepository;
use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemSearchCond, ItemUpdateDto};

const SELECT_ITEM: &str = "SELECT id, item_name, price, quantity FROM item";

/// Repository over the relational `item` table.
#[derive(Debug, Clone)]
pub struct SqlItemRepository {
    pool: SqlitePool,
}

impl SqlItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Builds the listing query, appending a predicate only for each filter present.
    fn find_all_query(cond: &ItemSearchCond) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(SELECT_ITEM);
        let mut keyword = " WHERE ";

        // instr() rather than LIKE: case-sensitive, and '%' / '_' in the filter stay literal.
        if let Some(item_name) = cond.name_filter() {
            builder
                .push(keyword)
                .push("instr(item_name, ")
                .push_bind(item_name.to_owned())
                .push(") > 0");
            keyword = " AND ";
        }

        if let Some(max_price) = cond.max_price {
            builder.push(keyword).push("price <= ").push_bind(max_price);
        }

        builder
    }
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    async fn create(&self, mut item: Item) -> AppResult<Item> {
        let result = sqlx::query("INSERT INTO item (item_name, price, quantity) VALUES (?, ?, ?)")
            .bind(item.item_name.as_deref())
            .bind(item.price)
            .bind(item.quantity)
            .execute(&self.pool)
            .await?;

        item.id = Some(result.last_insert_rowid());
        Ok(item)
    }

    async fn update(&self, item_id: i64, update_param: ItemUpdateDto) -> AppResult<()> {
        let rows_affected =
            sqlx::query("UPDATE item SET item_name = ?, price = ?, quantity = ? WHERE id = ?")
                .bind(update_param.item_name.as_deref())
                .bind(update_param.price)
                .bind(update_param.quantity)
                .bind(item_id)
                .execute(&self.pool)
                .await?
                .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!("item {}", item_id)));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!("{} WHERE id = ?", SELECT_ITEM))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn find_all(&self, cond: &ItemSearchCond) -> AppResult<Vec<Item>> {
        let mut builder = Self::find_all_query(cond);
        tracing::debug!("sql={}", builder.sql());

        let items = builder
            .build_query_as::<Item>()
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}
