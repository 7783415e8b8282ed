use thiserror::Error;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 資料が存在しない
    #[error("Item {0} not found")]
    ItemNotFound(uuid::Uuid),

    /// 会員が存在しない
    #[error("Member {0} not found")]
    MemberNotFound(uuid::Uuid),

    /// 入力値が不正
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 会員種別などの保存値が不正
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
