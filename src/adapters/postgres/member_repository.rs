use crate::domain::{Member, MemberId, MemberType};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをMemberに変換する
///
/// 未定義の会員種別は `MemberTypeError` として返す。
fn map_row_to_member(row: &PgRow) -> Result<Member> {
    let member_type_str: &str = row.get("member_type");
    let member_type = MemberType::from_str(member_type_str)?;

    Ok(Member {
        member_id: MemberId::from_uuid(row.get("member_id")),
        name: row.get("name"),
        member_type,
    })
}

/// PostgreSQL implementation of MemberRepository
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: Member) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO members (member_id, name, member_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (member_id)
            DO UPDATE SET
                name = EXCLUDED.name,
                member_type = EXCLUDED.member_type
            "#,
        )
        .bind(member.member_id.value())
        .bind(&member.name)
        .bind(member.member_type.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            "SELECT member_id, name, member_type FROM members WHERE member_id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_member).transpose()
    }
}
