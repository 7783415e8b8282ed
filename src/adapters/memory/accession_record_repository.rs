use crate::domain::{AccessionRecord, AccessionRecordId};
use crate::ports::accession_record_repository::{
    AccessionRecordRepository as AccessionRecordRepositoryTrait, Result,
};
use async_trait::async_trait;
use std::sync::Mutex;

use super::POISONED;

/// In-memory implementation of AccessionRecordRepository
///
/// Records are kept in insertion order.
pub struct AccessionRecordRepository {
    records: Mutex<Vec<AccessionRecord>>,
}

impl AccessionRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Create a repository pre-populated with records
    pub fn with_records(records: Vec<AccessionRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl Default for AccessionRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessionRecordRepositoryTrait for AccessionRecordRepository {
    async fn get_all_accession_records(&self) -> Result<Vec<AccessionRecord>> {
        Ok(self.records.lock().map_err(|_| POISONED)?.clone())
    }

    async fn save(&self, record: AccessionRecord) -> Result<()> {
        let mut records = self.records.lock().map_err(|_| POISONED)?;
        match records
            .iter_mut()
            .find(|r| r.accession_record_id == record.accession_record_id)
        {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    async fn get_by_id(&self, id: AccessionRecordId) -> Result<Option<AccessionRecord>> {
        let records = self.records.lock().map_err(|_| POISONED)?;
        Ok(records
            .iter()
            .find(|r| r.accession_record_id == id)
            .cloned())
    }
}
