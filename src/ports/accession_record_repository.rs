use crate::domain::{AccessionRecord, AccessionRecordId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 登録番号リポジトリポート
///
/// 貸出可能判定に必要な読み取り（全件取得）と、
/// カタログ登録時の書き込みを抽象化する。
#[allow(dead_code)]
#[async_trait]
pub trait AccessionRecordRepository: Send + Sync {
    /// すべての登録番号を取得する
    ///
    /// 貸出可能な登録番号の判定に使用される。
    async fn get_all_accession_records(&self) -> Result<Vec<AccessionRecord>>;

    /// 登録番号を保存する
    async fn save(&self, record: AccessionRecord) -> Result<()>;

    /// IDで登録番号を取得する
    async fn get_by_id(&self, id: AccessionRecordId) -> Result<Option<AccessionRecord>>;
}
