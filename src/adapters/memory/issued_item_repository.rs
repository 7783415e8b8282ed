use crate::domain::{IssuedItem, IssuedItemId};
use crate::ports::issued_item_repository::{
    CopyAlreadyIssued, IssuedItemAlreadyReturned, IssuedItemRepository as IssuedItemRepositoryTrait,
    Result,
};
use async_trait::async_trait;
use std::sync::Mutex;

use super::POISONED;

/// In-memory implementation of IssuedItemRepository
///
/// Rejects a second open issued item for the same accession record,
/// mirroring the partial unique index of the PostgreSQL schema.
/// A stored issued item that is already returned is never overwritten.
pub struct IssuedItemRepository {
    issued_items: Mutex<Vec<IssuedItem>>,
}

impl IssuedItemRepository {
    pub fn new() -> Self {
        Self {
            issued_items: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with issued items
    ///
    /// No uniqueness check is applied to the seed data.
    pub fn with_issued_items(issued_items: Vec<IssuedItem>) -> Self {
        Self {
            issued_items: Mutex::new(issued_items),
        }
    }
}

impl Default for IssuedItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IssuedItemRepositoryTrait for IssuedItemRepository {
    async fn get_all_issued_items(&self) -> Result<Vec<IssuedItem>> {
        Ok(self.issued_items.lock().map_err(|_| POISONED)?.clone())
    }

    async fn save(&self, issued_item: IssuedItem) -> Result<()> {
        let mut issued_items = self.issued_items.lock().map_err(|_| POISONED)?;

        let conflict = issued_item.is_open()
            && issued_items.iter().any(|i| {
                i.is_open()
                    && i.accession_record_id == issued_item.accession_record_id
                    && i.issued_item_id != issued_item.issued_item_id
            });
        if conflict {
            return Err(Box::new(CopyAlreadyIssued));
        }

        match issued_items
            .iter_mut()
            .find(|i| i.issued_item_id == issued_item.issued_item_id)
        {
            Some(existing) if existing.is_returned => {
                return Err(Box::new(IssuedItemAlreadyReturned));
            }
            Some(existing) => *existing = issued_item,
            None => issued_items.push(issued_item),
        }
        Ok(())
    }

    async fn get_by_id(&self, id: IssuedItemId) -> Result<Option<IssuedItem>> {
        let issued_items = self.issued_items.lock().map_err(|_| POISONED)?;
        Ok(issued_items
            .iter()
            .find(|i| i.issued_item_id == id)
            .cloned())
    }
}
