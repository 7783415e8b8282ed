use crate::application::ServiceDependencies;
use crate::domain::{
    self, AccessionRecord, CatalogError, Item, ItemId, Member, MemberId, MemberType,
    MemberTypeError,
};

use super::errors::{CatalogApplicationError, Result};

fn invalid_input(err: CatalogError) -> CatalogApplicationError {
    let message = match err {
        CatalogError::BlankTitle => "title must not be blank",
        CatalogError::BlankName => "name must not be blank",
    };
    CatalogApplicationError::InvalidInput(message.to_string())
}

/// 資料を登録する
pub async fn add_item(deps: &ServiceDependencies, title: &str) -> Result<Item> {
    let item = domain::catalog::new_item(title).map_err(invalid_input)?;

    deps.item_repository
        .save(item.clone())
        .await
        .map_err(map_repository_error)?;

    tracing::info!(item_id = %item.item_id.value(), title = %item.title, "Item added");
    Ok(item)
}

/// 資料に登録番号（物理的な1冊）を追加する
///
/// # エラー
/// - ItemNotFound: 資料が存在しない
pub async fn add_accession_record(
    deps: &ServiceDependencies,
    item_id: ItemId,
) -> Result<AccessionRecord> {
    let item = get_item(deps, item_id).await?;
    let record = domain::catalog::new_accession_record(&item);

    deps.accession_record_repository
        .save(record.clone())
        .await
        .map_err(map_repository_error)?;

    tracing::info!(
        item_id = %item_id.value(),
        accession_record_id = %record.accession_record_id.value(),
        "Accession record added"
    );
    Ok(record)
}

/// 会員を登録する
pub async fn register_member(
    deps: &ServiceDependencies,
    name: &str,
    member_type: MemberType,
) -> Result<Member> {
    let member = domain::catalog::new_member(name, member_type).map_err(invalid_input)?;

    deps.member_repository
        .save(member.clone())
        .await
        .map_err(map_repository_error)?;

    tracing::info!(
        member_id = %member.member_id.value(),
        member_type = member.member_type.as_str(),
        "Member registered"
    );
    Ok(member)
}

pub async fn get_item(deps: &ServiceDependencies, item_id: ItemId) -> Result<Item> {
    deps.item_repository
        .get_by_id(item_id)
        .await
        .map_err(map_repository_error)?
        .ok_or(CatalogApplicationError::ItemNotFound(item_id.value()))
}

pub async fn list_items(deps: &ServiceDependencies) -> Result<Vec<Item>> {
    deps.item_repository
        .list()
        .await
        .map_err(map_repository_error)
}

pub async fn get_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<Member> {
    deps.member_repository
        .get_by_id(member_id)
        .await
        .map_err(map_repository_error)?
        .ok_or(CatalogApplicationError::MemberNotFound(member_id.value()))
}

/// リポジトリのエラーをアプリケーション層のエラーに変換する
///
/// 保存された会員種別が不正な場合は `InvalidConfiguration` にする。
fn map_repository_error(e: Box<dyn std::error::Error + Send + Sync>) -> CatalogApplicationError {
    if let Some(invalid) = e.downcast_ref::<MemberTypeError>() {
        return CatalogApplicationError::InvalidConfiguration(invalid.to_string());
    }
    CatalogApplicationError::RepositoryError(e)
}
