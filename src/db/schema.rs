use sqlx::SqlitePool;

/// AUTOINCREMENT keeps identifiers from being reused after the highest row is gone.
const CREATE_ITEM_TABLE: &str = "CREATE TABLE IF NOT EXISTS item (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item_name VARCHAR(10),
    price INTEGER,
    quantity INTEGER
)";

/// Creates the `item` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ITEM_TABLE).execute(pool).await?;
    tracing::debug!("item table ready");
    Ok(())
}
