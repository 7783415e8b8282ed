use crate::domain::{Member, MemberId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
///
/// 会員種別は返却期限の計算に使われる。
#[allow(dead_code)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn save(&self, member: Member) -> Result<()>;

    async fn get_by_id(&self, id: MemberId) -> Result<Option<Member>>;
}
