use crate::domain::{Item, ItemId};
use crate::ports::item_repository::{ItemRepository as ItemRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::POISONED;

/// In-memory implementation of ItemRepository
pub struct ItemRepository {
    items: Mutex<HashMap<ItemId, Item>>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for ItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    async fn save(&self, item: Item) -> Result<()> {
        self.items
            .lock()
            .map_err(|_| POISONED)?
            .insert(item.item_id, item);
        Ok(())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.lock().map_err(|_| POISONED)?.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .lock()
            .map_err(|_| POISONED)?
            .values()
            .cloned()
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }
}
