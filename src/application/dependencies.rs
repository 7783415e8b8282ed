use crate::domain::LateFeePerDay;
use crate::ports::*;
use std::sync::Arc;

use super::issued_item::CopySelector;

/// サービスの依存関係
///
/// 振る舞いは持たず、アプリケーション層の関数に引数として渡す。
/// PostgreSQLアダプターとインメモリアダプターのどちらでも組み立てられる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub item_repository: Arc<dyn ItemRepository>,
    pub accession_record_repository: Arc<dyn AccessionRecordRepository>,
    pub member_repository: Arc<dyn MemberRepository>,
    pub issued_item_repository: Arc<dyn IssuedItemRepository>,
    /// 貸出可能な登録番号から1冊を選ぶ方針
    pub copy_selector: Arc<dyn CopySelector>,
    /// 新規貸出に適用する1日あたりの延滞料金
    pub late_fee_per_day: LateFeePerDay,
}
