use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IssuedItemId, ItemId, MemberId};

/// コマンド：資料を貸し出す
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueItem {
    pub item_id: ItemId,
    pub member_id: MemberId,
    pub issued_at: DateTime<Utc>,
}

/// コマンド：資料を返却する
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub issued_item_id: IssuedItemId,
    pub returned_at: DateTime<Utc>,
}
