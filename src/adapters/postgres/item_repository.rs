use crate::domain::{Item, ItemId};
use crate::ports::item_repository::{ItemRepository as ItemRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_item(row: &PgRow) -> Item {
    Item {
        item_id: ItemId::from_uuid(row.get("item_id")),
        title: row.get("title"),
    }
}

/// PostgreSQL implementation of ItemRepository
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    async fn save(&self, item: Item) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO items (item_id, title)
            VALUES ($1, $2)
            ON CONFLICT (item_id)
            DO UPDATE SET title = EXCLUDED.title
            "#,
        )
        .bind(item.item_id.value())
        .bind(&item.title)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query("SELECT item_id, title FROM items WHERE item_id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row_to_item))
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query("SELECT item_id, title FROM items ORDER BY title ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_row_to_item).collect())
    }
}
