use crate::domain::{AccessionRecord, AccessionRecordId, ItemId};
use crate::ports::accession_record_repository::{
    AccessionRecordRepository as AccessionRecordRepositoryTrait, Result,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_accession_record(row: &PgRow) -> AccessionRecord {
    AccessionRecord {
        accession_record_id: AccessionRecordId::from_uuid(row.get("accession_record_id")),
        item_id: ItemId::from_uuid(row.get("item_id")),
    }
}

/// PostgreSQL implementation of AccessionRecordRepository
pub struct AccessionRecordRepository {
    pool: PgPool,
}

impl AccessionRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessionRecordRepositoryTrait for AccessionRecordRepository {
    /// Load every accession record in insertion order
    async fn get_all_accession_records(&self) -> Result<Vec<AccessionRecord>> {
        let rows: Vec<PgRow> = sqlx::query(
            r#"
            SELECT accession_record_id, item_id
            FROM accession_records
            ORDER BY sequence_number ASC
            "#,
        )
        .fetch(&self.pool)
        .try_collect()
        .await?;

        Ok(rows.iter().map(map_row_to_accession_record).collect())
    }

    /// Insert an accession record
    ///
    /// Accession records are immutable, so a second save of the same id is a no-op.
    async fn save(&self, record: AccessionRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO accession_records (accession_record_id, item_id)
            VALUES ($1, $2)
            ON CONFLICT (accession_record_id) DO NOTHING
            "#,
        )
        .bind(record.accession_record_id.value())
        .bind(record.item_id.value())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: AccessionRecordId) -> Result<Option<AccessionRecord>> {
        let row = sqlx::query(
            r#"
            SELECT accession_record_id, item_id
            FROM accession_records
            WHERE accession_record_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_accession_record))
    }
}
