use crate::application::{ServiceDependencies, catalog, issued_item};
use crate::domain::{
    IssuedItemId, ItemId, MemberId, MemberType,
    commands::{IssueItem, ReturnItem},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        AccessionRecordResponse, AddItemRequest, IssueItemRequest, IssuedItemResponse,
        ItemResponse, MemberResponse, RegisterMemberRequest,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Catalog
// ============================================================================

/// POST /items - 資料を登録
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = catalog::add_item(&state.service_deps, &req.title).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /items - 資料一覧（タイトル順）
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = catalog::list_items(&state.service_deps).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/:id - 資料をIDで取得
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = catalog::get_item(&state.service_deps, ItemId::from_uuid(item_id)).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// POST /items/:id/accession-records - 資料に1冊追加
pub async fn add_accession_record(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
) -> Result<(StatusCode, Json<AccessionRecordResponse>), ApiError> {
    let record =
        catalog::add_accession_record(&state.service_deps, ItemId::from_uuid(item_id)).await?;
    Ok((StatusCode::CREATED, Json(AccessionRecordResponse::from(record))))
}

/// POST /members - 会員を登録
///
/// member_typeは "student" または "faculty"。
pub async fn register_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let member_type =
        MemberType::from_str(&req.member_type).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let member = catalog::register_member(&state.service_deps, &req.name, member_type).await?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(member))))
}

/// GET /members/:id - 会員をIDで取得
pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = catalog::get_member(&state.service_deps, MemberId::from_uuid(member_id)).await?;
    Ok(Json(MemberResponse::from(member)))
}

// ============================================================================
// Availability
// ============================================================================

/// GET /accession-records/issuable - 貸出可能な登録番号の一覧
pub async fn list_issuable_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccessionRecordResponse>>, ApiError> {
    let records = issued_item::get_all_issuable_acc_records(&state.service_deps).await?;
    Ok(Json(
        records
            .into_iter()
            .map(AccessionRecordResponse::from)
            .collect(),
    ))
}

/// GET /items/:id/issuable-record - 資料の貸出可能な1冊を選ぶ
///
/// 貸出可能な1冊がない場合は404を返す。
pub async fn get_issuable_record(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<AccessionRecordResponse>, ApiError> {
    let record =
        issued_item::get_random_issuable_acc_record(&state.service_deps, ItemId::from_uuid(item_id))
            .await?;
    Ok(Json(AccessionRecordResponse::from(record)))
}

// ============================================================================
// Issued items
// ============================================================================

/// POST /issued-items - 資料を貸し出す
///
/// 強制されるビジネスルール:
/// - 会員が存在すること
/// - 資料が存在すること
/// - 資料に貸出可能な登録番号があること
pub async fn issue_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IssueItemRequest>,
) -> Result<(StatusCode, Json<IssuedItemResponse>), ApiError> {
    let now = chrono::Utc::now();
    let cmd = IssueItem {
        item_id: ItemId::from_uuid(req.item_id),
        member_id: MemberId::from_uuid(req.member_id),
        issued_at: now,
    };

    let issued = issued_item::issue_item(&state.service_deps, cmd).await?;
    let summary =
        issued_item::get_issued_item_summary(&state.service_deps, issued.issued_item_id, now)
            .await?;

    Ok((StatusCode::CREATED, Json(IssuedItemResponse::from(summary))))
}

/// GET /issued-items/:id - 貸出記録を取得
///
/// 返却期限と、現在時刻（返却済みなら返却日）時点の延滞料金を含む。
pub async fn get_issued_item(
    State(state): State<Arc<AppState>>,
    Path(issued_item_id): Path<Uuid>,
) -> Result<Json<IssuedItemResponse>, ApiError> {
    let summary = issued_item::get_issued_item_summary(
        &state.service_deps,
        IssuedItemId::from_uuid(issued_item_id),
        chrono::Utc::now(),
    )
    .await?;

    Ok(Json(IssuedItemResponse::from(summary)))
}

/// POST /issued-items/:id/return - 資料を返却
///
/// 延滞中でも返却を受け付け、返却時点の延滞料金を返す。
pub async fn return_item(
    State(state): State<Arc<AppState>>,
    Path(issued_item_id): Path<Uuid>,
) -> Result<Json<IssuedItemResponse>, ApiError> {
    let cmd = ReturnItem {
        issued_item_id: IssuedItemId::from_uuid(issued_item_id),
        returned_at: chrono::Utc::now(),
    };

    let receipt = issued_item::return_item(&state.service_deps, cmd).await?;
    Ok(Json(IssuedItemResponse::from(receipt)))
}
