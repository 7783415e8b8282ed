use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::issued_item::IssuedItemSummary;
use crate::domain::{AccessionRecord, Item, Member};

// ============================================================================
// Requests
// ============================================================================

/// 資料登録リクエスト（POST /items）
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub title: String,
}

/// 会員登録リクエスト（POST /members）
///
/// member_typeは文字列で受け取り、未定義の値は400にする。
#[derive(Debug, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
    pub member_type: String,
}

/// 貸出リクエスト（POST /issued-items）
#[derive(Debug, Deserialize)]
pub struct IssueItemRequest {
    pub item_id: Uuid,
    pub member_id: Uuid,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: Uuid,
    pub title: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            item_id: item.item_id.value(),
            title: item.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccessionRecordResponse {
    pub accession_record_id: Uuid,
    pub item_id: Uuid,
}

impl From<AccessionRecord> for AccessionRecordResponse {
    fn from(record: AccessionRecord) -> Self {
        Self {
            accession_record_id: record.accession_record_id.value(),
            item_id: record.item_id.value(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: Uuid,
    pub name: String,
    pub member_type: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id.value(),
            name: member.name,
            member_type: member.member_type.as_str().to_string(),
        }
    }
}

/// 貸出記録レスポンス（返却期限と延滞料金を含む）
#[derive(Debug, Serialize)]
pub struct IssuedItemResponse {
    pub issued_item_id: Uuid,
    pub accession_record_id: Uuid,
    pub member_id: Uuid,
    pub member_type: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub is_returned: bool,
    pub return_date: Option<DateTime<Utc>>,
    pub late_fee_per_day: u32,
    pub late_days: u64,
    pub late_fee: u64,
}

impl From<IssuedItemSummary> for IssuedItemResponse {
    fn from(summary: IssuedItemSummary) -> Self {
        let issued_item = summary.issued_item;
        Self {
            issued_item_id: issued_item.issued_item_id.value(),
            accession_record_id: issued_item.accession_record_id.value(),
            member_id: issued_item.member_id.value(),
            member_type: issued_item.member_type.as_str().to_string(),
            issue_date: issued_item.issue_date,
            due_date: summary.due_date,
            is_returned: issued_item.is_returned,
            return_date: issued_item.return_date,
            late_fee_per_day: issued_item.late_fee_per_day.value(),
            late_days: summary.late_days,
            late_fee: summary.late_fee,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
