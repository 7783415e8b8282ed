#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    AccessionRecord, AccessionRecordId, IssueItemError, IssuedItemId, ItemId, LateFeePerDay,
    Member, MemberId, MemberType, ReturnItemError,
};

/// 貸出記録 - 1冊の登録番号の1回の貸出
///
/// `member_type` は貸出時点の会員種別。返却期限の計算に使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedItem {
    pub issued_item_id: IssuedItemId,
    pub accession_record_id: AccessionRecordId,
    pub member_id: MemberId,
    pub member_type: MemberType,

    // 貸出日は作成時に一度だけ設定される
    pub issue_date: DateTime<Utc>,
    pub is_returned: bool,
    pub return_date: Option<DateTime<Utc>>,
    pub late_fee_per_day: LateFeePerDay,
}

impl IssuedItem {
    /// 未返却の貸出か
    pub fn is_open(&self) -> bool {
        !self.is_returned
    }
}

// ============================================================================
// 貸出可能な登録番号の判定
// ============================================================================

/// 純粋関数：貸出可能な登録番号をすべて返す
///
/// 未返却の貸出から参照されている登録番号の集合を作り、
/// それに含まれない登録番号を元の順序のまま返す（集合の差）。
/// 貸出履歴が一度もない登録番号も貸出可能として含まれる。
pub fn issuable_accession_records(
    accession_records: &[AccessionRecord],
    issued_items: &[IssuedItem],
) -> Vec<AccessionRecord> {
    let on_loan: HashSet<AccessionRecordId> = issued_items
        .iter()
        .filter(|issued| issued.is_open())
        .map(|issued| issued.accession_record_id)
        .collect();

    accession_records
        .iter()
        .filter(|record| !on_loan.contains(&record.accession_record_id))
        .cloned()
        .collect()
}

/// 純粋関数：指定された資料の貸出可能な登録番号を返す
pub fn issuable_records_for_item(
    accession_records: &[AccessionRecord],
    issued_items: &[IssuedItem],
    item_id: ItemId,
) -> Vec<AccessionRecord> {
    issuable_accession_records(accession_records, issued_items)
        .into_iter()
        .filter(|record| record.item_id == item_id)
        .collect()
}

// ============================================================================
// 返却期限と延滞料金
// ============================================================================

/// 純粋関数：返却期限
///
/// 学生は貸出日 + 7日、教職員は貸出日 + 90日。
pub fn due_date(issued_item: &IssuedItem) -> DateTime<Utc> {
    issued_item.issue_date + Duration::days(issued_item.member_type.loan_period_days())
}

/// 純粋関数：延滞日数
///
/// 返却期限からの経過日数（端数切り捨て）。期限前は0。
pub fn late_days(issued_item: &IssuedItem, now: DateTime<Utc>) -> u64 {
    let elapsed = (now - due_date(issued_item)).num_days();
    elapsed.max(0) as u64
}

/// 純粋関数：延滞料金
///
/// 延滞日数 × 1日あたりの延滞料金。
pub fn late_fee(issued_item: &IssuedItem, now: DateTime<Utc>) -> u64 {
    late_days(issued_item, now) * u64::from(issued_item.late_fee_per_day.value())
}

// ============================================================================
// 貸出と返却
// ============================================================================

/// 純粋関数：登録番号を会員に貸し出す
///
/// 登録番号が貸出可能かどうかは呼び出し側が
/// `issuable_records_for_item` で確認済みであること。
///
/// 副作用なし。新しいIssuedItemを返す。
pub fn issue_item(
    record: &AccessionRecord,
    item_id: ItemId,
    member: &Member,
    issued_at: DateTime<Utc>,
    late_fee_per_day: LateFeePerDay,
) -> Result<IssuedItem, IssueItemError> {
    if record.item_id != item_id {
        return Err(IssueItemError::ItemMismatch);
    }

    Ok(IssuedItem {
        issued_item_id: IssuedItemId::new(),
        accession_record_id: record.accession_record_id,
        member_id: member.member_id,
        member_type: member.member_type,
        issue_date: issued_at,
        is_returned: false,
        return_date: None,
        late_fee_per_day,
    })
}

/// 純粋関数：返却する
///
/// 延滞していても返却は受け付ける。延滞料金は呼び出し側が
/// `late_fee(&returned, returned_at)` で求める。
pub fn return_item(
    issued_item: &IssuedItem,
    returned_at: DateTime<Utc>,
) -> Result<IssuedItem, ReturnItemError> {
    if issued_item.is_returned {
        return Err(ReturnItemError::AlreadyReturned);
    }

    Ok(IssuedItem {
        is_returned: true,
        return_date: Some(returned_at),
        ..issued_item.clone()
    })
}
