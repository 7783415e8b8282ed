use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum IssuedItemApplicationError {
    /// 指定された資料に貸出可能な登録番号がない
    ///
    /// 登録番号が1冊もない場合と、すべて貸出中の場合を区別しない。
    #[error("No issuable accession record for item {0}")]
    NoIssuableRecord(uuid::Uuid),

    /// 資料が存在しない
    #[error("Item {0} not found")]
    ItemNotFound(uuid::Uuid),

    /// 会員が存在しない
    #[error("Member {0} not found")]
    MemberNotFound(uuid::Uuid),

    /// 貸出記録が存在しない
    #[error("Issued item {0} not found")]
    IssuedItemNotFound(uuid::Uuid),

    /// 貸出記録の状態が不正（例: 返却済みの返却）
    #[error("Invalid issued item state: {0}")]
    InvalidIssuedItemState(String),

    /// 選ばれた登録番号が同時に他の貸出に使われた
    #[error("Accession record is already issued")]
    CopyAlreadyIssued,

    /// 会員種別などの保存値が不正
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, IssuedItemApplicationError>;
