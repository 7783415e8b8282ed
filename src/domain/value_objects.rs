#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 資料ID - カタログ上のタイトル（作品）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// 登録番号ID - 個別に管理される物理的な1冊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessionRecordId(Uuid);

impl AccessionRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for AccessionRecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// 会員ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

/// 貸出記録ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssuedItemId(Uuid);

impl IssuedItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for IssuedItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// 会員種別のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberTypeError {
    /// 未定義の会員種別
    Unknown(String),
}

impl std::fmt::Display for MemberTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberTypeError::Unknown(s) => write!(f, "Unknown member type: {}", s),
        }
    }
}

impl std::error::Error for MemberTypeError {}

/// 会員種別
///
/// 貸出期間を決める。種別はこの2つだけで、それ以外の値は
/// 文字列から変換する時点でエラーになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    /// 学生（貸出期間7日）
    Student,
    /// 教職員（貸出期間90日）
    Faculty,
}

impl MemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::Student => "student",
            MemberType::Faculty => "faculty",
        }
    }

    /// 貸出期間（日数）
    pub fn loan_period_days(&self) -> i64 {
        match self {
            MemberType::Student => 7,
            MemberType::Faculty => 90,
        }
    }
}

impl std::str::FromStr for MemberType {
    type Err = MemberTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(MemberType::Student),
            "faculty" => Ok(MemberType::Faculty),
            _ => Err(MemberTypeError::Unknown(s.to_string())),
        }
    }
}

/// 1日あたりの延滞料金
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeePerDay(u32);

impl LateFeePerDay {
    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_item_id_creation() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_accession_record_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = AccessionRecordId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    #[test]
    fn test_member_type_loan_period() {
        assert_eq!(MemberType::Student.loan_period_days(), 7);
        assert_eq!(MemberType::Faculty.loan_period_days(), 90);
    }

    #[test]
    fn test_member_type_from_str() {
        assert_eq!(MemberType::from_str("student"), Ok(MemberType::Student));
        assert_eq!(MemberType::from_str("FACULTY"), Ok(MemberType::Faculty));
    }

    #[test]
    fn test_member_type_from_str_unknown() {
        let result = MemberType::from_str("alumni");
        assert_eq!(
            result,
            Err(MemberTypeError::Unknown("alumni".to_string()))
        );
    }

    #[test]
    fn test_member_type_as_str_round_trips() {
        for member_type in [MemberType::Student, MemberType::Faculty] {
            assert_eq!(MemberType::from_str(member_type.as_str()), Ok(member_type));
        }
    }
}
