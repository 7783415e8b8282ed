use crate::application::ServiceDependencies;
use crate::domain::{
    self, AccessionRecord, IssuedItem, IssuedItemId, ItemId, MemberTypeError, commands::*,
};
use crate::ports::{CopyAlreadyIssued, IssuedItemAlreadyReturned};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::{IssuedItemApplicationError, Result};

/// 貸出記録と、その返却期限・延滞料金
///
/// 照会時は照会時点、返却時は返却時点での延滞料金を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedItemSummary {
    pub issued_item: IssuedItem,
    pub due_date: DateTime<Utc>,
    pub late_days: u64,
    pub late_fee: u64,
}

/// 貸出可能な登録番号をすべて取得する
///
/// 2つのリポジトリから全件を読み、ドメイン層の集合差で判定する。
/// 同じ入力に対しては何度呼んでも同じ結果になる。
///
/// # エラー
/// - RepositoryError: 読み込み失敗
pub async fn get_all_issuable_acc_records(
    deps: &ServiceDependencies,
) -> Result<Vec<AccessionRecord>> {
    let accession_records = deps
        .accession_record_repository
        .get_all_accession_records()
        .await
        .map_err(map_repository_error)?;

    let issued_items = deps
        .issued_item_repository
        .get_all_issued_items()
        .await
        .map_err(map_repository_error)?;

    let issuable = domain::issued_item::issuable_accession_records(&accession_records, &issued_items);

    tracing::debug!(
        total = accession_records.len(),
        issuable = issuable.len(),
        "Computed issuable accession records"
    );

    Ok(issuable)
}

/// 指定された資料の貸出可能な登録番号を1冊選ぶ
///
/// どの1冊を選ぶかは `deps.copy_selector` に任せる。
///
/// # エラー
/// - NoIssuableRecord: 貸出可能な登録番号がない
/// - RepositoryError: 読み込み失敗
pub async fn get_random_issuable_acc_record(
    deps: &ServiceDependencies,
    item_id: ItemId,
) -> Result<AccessionRecord> {
    let issuable = get_all_issuable_acc_records(deps).await?;

    let candidates: Vec<AccessionRecord> = issuable
        .into_iter()
        .filter(|record| record.item_id == item_id)
        .collect();

    deps.copy_selector
        .select(&candidates)
        .ok_or(IssuedItemApplicationError::NoIssuableRecord(item_id.value()))
}

/// 返却期限を求める
pub fn get_due_date(issued_item: &IssuedItem) -> DateTime<Utc> {
    domain::issued_item::due_date(issued_item)
}

/// `now` 時点での延滞料金を求める
pub fn get_late_fee(issued_item: &IssuedItem, now: DateTime<Utc>) -> u64 {
    domain::issued_item::late_fee(issued_item, now)
}

/// 資料を会員に貸し出す
///
/// ビジネスルール：
/// - 会員が存在すること
/// - 資料が存在すること
/// - 資料に貸出可能な登録番号があること
///
/// 延滞料金の単価は `deps.late_fee_per_day` を使う。
pub async fn issue_item(deps: &ServiceDependencies, cmd: IssueItem) -> Result<IssuedItem> {
    // 1. 会員の存在確認
    let member = deps
        .member_repository
        .get_by_id(cmd.member_id)
        .await
        .map_err(map_repository_error)?
        .ok_or(IssuedItemApplicationError::MemberNotFound(cmd.member_id.value()))?;

    // 2. 資料の存在確認
    deps.item_repository
        .get_by_id(cmd.item_id)
        .await
        .map_err(map_repository_error)?
        .ok_or(IssuedItemApplicationError::ItemNotFound(cmd.item_id.value()))?;

    // 3. 貸出可能な登録番号を選ぶ
    let record = get_random_issuable_acc_record(deps, cmd.item_id).await?;

    // 4. ドメイン層の純粋関数を呼び出し
    let issued_item = domain::issued_item::issue_item(
        &record,
        cmd.item_id,
        &member,
        cmd.issued_at,
        deps.late_fee_per_day,
    )
    .map_err(|e| IssuedItemApplicationError::DomainError(format!("{:?}", e)))?;

    // 5. 保存
    deps.issued_item_repository
        .save(issued_item.clone())
        .await
        .map_err(map_repository_error)?;

    tracing::info!(
        issued_item_id = %issued_item.issued_item_id.value(),
        accession_record_id = %issued_item.accession_record_id.value(),
        member_id = %issued_item.member_id.value(),
        "Item issued"
    );

    Ok(issued_item)
}

/// 資料を返却する
///
/// ビジネスルール：
/// - 貸出記録が存在すること
/// - 未返却であること
/// - 延滞していても返却は受け付け、返却時点の延滞料金を返す
pub async fn return_item(deps: &ServiceDependencies, cmd: ReturnItem) -> Result<IssuedItemSummary> {
    let issued_item = load_issued_item(deps, cmd.issued_item_id).await?;

    let returned = domain::issued_item::return_item(&issued_item, cmd.returned_at).map_err(|_| {
        IssuedItemApplicationError::InvalidIssuedItemState(
            "Issued item is already returned".to_string(),
        )
    })?;

    deps.issued_item_repository
        .save(returned.clone())
        .await
        .map_err(map_repository_error)?;

    let receipt = IssuedItemSummary {
        due_date: domain::issued_item::due_date(&returned),
        late_days: domain::issued_item::late_days(&returned, cmd.returned_at),
        late_fee: domain::issued_item::late_fee(&returned, cmd.returned_at),
        issued_item: returned,
    };

    tracing::info!(
        issued_item_id = %cmd.issued_item_id.value(),
        late_days = receipt.late_days,
        late_fee = receipt.late_fee,
        "Item returned"
    );

    Ok(receipt)
}

/// 貸出記録と `now` 時点での返却期限・延滞料金を取得する
///
/// 返却済みの貸出は返却日時点で計算する。
pub async fn get_issued_item_summary(
    deps: &ServiceDependencies,
    issued_item_id: IssuedItemId,
    now: DateTime<Utc>,
) -> Result<IssuedItemSummary> {
    let issued_item = load_issued_item(deps, issued_item_id).await?;
    let as_of = issued_item.return_date.unwrap_or(now);

    Ok(IssuedItemSummary {
        due_date: domain::issued_item::due_date(&issued_item),
        late_days: domain::issued_item::late_days(&issued_item, as_of),
        late_fee: domain::issued_item::late_fee(&issued_item, as_of),
        issued_item,
    })
}

async fn load_issued_item(
    deps: &ServiceDependencies,
    issued_item_id: IssuedItemId,
) -> Result<IssuedItem> {
    deps.issued_item_repository
        .get_by_id(issued_item_id)
        .await
        .map_err(map_repository_error)?
        .ok_or(IssuedItemApplicationError::IssuedItemNotFound(
            issued_item_id.value(),
        ))
}

/// リポジトリのエラーをアプリケーション層のエラーに変換する
///
/// アダプターが返す既知のエラー型は個別のバリアントにする。
fn map_repository_error(e: Box<dyn std::error::Error + Send + Sync>) -> IssuedItemApplicationError {
    if e.downcast_ref::<CopyAlreadyIssued>().is_some() {
        return IssuedItemApplicationError::CopyAlreadyIssued;
    }
    if let Some(returned) = e.downcast_ref::<IssuedItemAlreadyReturned>() {
        return IssuedItemApplicationError::InvalidIssuedItemState(returned.to_string());
    }
    if let Some(invalid) = e.downcast_ref::<MemberTypeError>() {
        return IssuedItemApplicationError::InvalidConfiguration(invalid.to_string());
    }
    IssuedItemApplicationError::RepositoryError(e)
}
