#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use super::{AccessionRecordId, CatalogError, ItemId, MemberId, MemberType};

/// 資料（カタログ上のタイトル）
///
/// 1つの資料に対して複数の登録番号（物理的な冊）が存在する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub title: String,
}

/// 登録番号（物理的な1冊）
///
/// 作成後は変更されない。必ず1つの資料に属する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessionRecord {
    pub accession_record_id: AccessionRecordId,
    pub item_id: ItemId,
}

/// 会員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
    pub member_type: MemberType,
}

/// 純粋関数：資料を登録する
///
/// 前後の空白は取り除く。空のタイトルは受け付けない。
pub fn new_item(title: &str) -> Result<Item, CatalogError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CatalogError::BlankTitle);
    }

    Ok(Item {
        item_id: ItemId::new(),
        title: title.to_string(),
    })
}

/// 純粋関数：資料に新しい登録番号を追加する
pub fn new_accession_record(item: &Item) -> AccessionRecord {
    AccessionRecord {
        accession_record_id: AccessionRecordId::new(),
        item_id: item.item_id,
    }
}

/// 純粋関数：会員を登録する
pub fn new_member(name: &str, member_type: MemberType) -> Result<Member, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::BlankName);
    }

    Ok(Member {
        member_id: MemberId::new(),
        name: name.to_string(),
        member_type,
    })
}
