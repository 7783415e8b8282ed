use crate::domain::{Item, ItemId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 資料リポジトリポート
#[allow(dead_code)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn save(&self, item: Item) -> Result<()>;

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// タイトル順で全件を返す
    async fn list(&self) -> Result<Vec<Item>>;
}
