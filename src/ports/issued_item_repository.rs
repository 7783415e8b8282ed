use crate::domain::{IssuedItem, IssuedItemId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出記録の保存時エラー
///
/// 同じ登録番号に未返却の貸出が既に存在する場合に返す。
/// アダプターはこの型でラップして返し、アプリケーション層が判別する。
#[derive(Debug)]
pub struct CopyAlreadyIssued;

impl std::fmt::Display for CopyAlreadyIssued {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Accession record already has an open issued item")
    }
}

impl std::error::Error for CopyAlreadyIssued {}

/// 貸出記録の保存時エラー
///
/// 返却済みの貸出記録を上書きしようとした場合に返す。
/// 返却日は一度だけ設定される。
#[derive(Debug)]
pub struct IssuedItemAlreadyReturned;

impl std::fmt::Display for IssuedItemAlreadyReturned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Issued item is already returned")
    }
}

impl std::error::Error for IssuedItemAlreadyReturned {}

/// 貸出記録リポジトリポート
#[allow(dead_code)]
#[async_trait]
pub trait IssuedItemRepository: Send + Sync {
    /// すべての貸出記録を取得する
    ///
    /// 返却済みも含む。貸出可能判定では未返却のものだけが使われる。
    async fn get_all_issued_items(&self) -> Result<Vec<IssuedItem>>;

    /// 貸出記録を保存する（upsert）
    ///
    /// 未返却の貸出が同じ登録番号に既にある場合は `CopyAlreadyIssued`、
    /// 保存済みの記録が返却済みの場合は `IssuedItemAlreadyReturned` を返す。
    async fn save(&self, issued_item: IssuedItem) -> Result<()>;

    /// IDで貸出記録を取得する
    async fn get_by_id(&self, id: IssuedItemId) -> Result<Option<IssuedItem>>;
}
