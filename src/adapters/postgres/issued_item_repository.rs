use crate::domain::{
    AccessionRecordId, IssuedItem, IssuedItemId, LateFeePerDay, MemberId, MemberType,
};
use crate::ports::issued_item_repository::{
    CopyAlreadyIssued, IssuedItemAlreadyReturned, IssuedItemRepository as IssuedItemRepositoryTrait,
    Result,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

use super::invalid_data;

/// 未返却の貸出を1冊1件に制限する部分ユニークインデックス
const ONE_OPEN_LOAN_INDEX: &str = "issued_items_one_open_loan";

/// PostgreSQLの行データをIssuedItemに変換する
///
/// late_fee_per_dayのi32からu32への変換と、会員種別の文字列からの変換で
/// エラーハンドリングを行う。
fn map_row_to_issued_item(row: &PgRow) -> Result<IssuedItem> {
    let late_fee_i32: i32 = row.get("late_fee_per_day");
    let late_fee_per_day = u32::try_from(late_fee_i32)
        .map_err(|_| invalid_data(format!("late_fee_per_day out of range: {}", late_fee_i32)))?;

    let member_type_str: &str = row.get("member_type");
    let member_type = MemberType::from_str(member_type_str)?;

    Ok(IssuedItem {
        issued_item_id: IssuedItemId::from_uuid(row.get("issued_item_id")),
        accession_record_id: AccessionRecordId::from_uuid(row.get("accession_record_id")),
        member_id: MemberId::from_uuid(row.get("member_id")),
        member_type,
        issue_date: row.get("issue_date"),
        is_returned: row.get("is_returned"),
        return_date: row.get("return_date"),
        late_fee_per_day: LateFeePerDay::new(late_fee_per_day),
    })
}

/// IssuedItemRepositoryのPostgreSQL実装
pub struct IssuedItemRepository {
    pool: PgPool,
}

impl IssuedItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssuedItemRepositoryTrait for IssuedItemRepository {
    /// 全貸出記録を作成順に取得
    async fn get_all_issued_items(&self) -> Result<Vec<IssuedItem>> {
        let rows: Vec<PgRow> = sqlx::query(
            r#"
            SELECT
                issued_item_id,
                accession_record_id,
                member_id,
                member_type,
                issue_date,
                is_returned,
                return_date,
                late_fee_per_day
            FROM issued_items
            ORDER BY sequence_number ASC
            "#,
        )
        .fetch(&self.pool)
        .try_collect()
        .await?;

        rows.iter().map(map_row_to_issued_item).collect()
    }

    /// 貸出記録を保存（upsert）
    ///
    /// issue_dateは作成時の値から変更しない。
    /// 返却済みの行は更新せず `IssuedItemAlreadyReturned` を返す。
    /// 部分ユニークインデックス違反は `CopyAlreadyIssued` に変換する。
    async fn save(&self, issued_item: IssuedItem) -> Result<()> {
        let late_fee_per_day = i32::try_from(issued_item.late_fee_per_day.value()).map_err(|_| {
            invalid_data(format!(
                "late_fee_per_day out of range: {}",
                issued_item.late_fee_per_day.value()
            ))
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO issued_items (
                issued_item_id,
                accession_record_id,
                member_id,
                member_type,
                issue_date,
                is_returned,
                return_date,
                late_fee_per_day
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (issued_item_id)
            DO UPDATE SET
                is_returned = EXCLUDED.is_returned,
                return_date = EXCLUDED.return_date
            WHERE issued_items.is_returned = FALSE
            "#,
        )
        .bind(issued_item.issued_item_id.value())
        .bind(issued_item.accession_record_id.value())
        .bind(issued_item.member_id.value())
        .bind(issued_item.member_type.as_str())
        .bind(issued_item.issue_date)
        .bind(issued_item.is_returned)
        .bind(issued_item.return_date)
        .bind(late_fee_per_day)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 1 => Ok(()),
            Ok(_) => Err(Box::new(IssuedItemAlreadyReturned)),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(ONE_OPEN_LOAN_INDEX) =>
            {
                Err(Box::new(CopyAlreadyIssued))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_by_id(&self, id: IssuedItemId) -> Result<Option<IssuedItem>> {
        let row = sqlx::query(
            r#"
            SELECT
                issued_item_id,
                accession_record_id,
                member_id,
                member_type,
                issue_date,
                is_returned,
                return_date,
                late_fee_per_day
            FROM issued_items
            WHERE issued_item_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_issued_item).transpose()
    }
}
