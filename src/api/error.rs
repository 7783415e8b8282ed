use crate::application::catalog::CatalogApplicationError;
use crate::application::issued_item::IssuedItemApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    IssuedItem(IssuedItemApplicationError),
    Catalog(CatalogApplicationError),
    /// リクエストの値が不正
    BadRequest(String),
}

impl From<IssuedItemApplicationError> for ApiError {
    fn from(err: IssuedItemApplicationError) -> Self {
        ApiError::IssuedItem(err)
    }
}

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError::Catalog(err)
    }
}

fn internal_error(
    error_type: &'static str,
    err: &(dyn std::error::Error + Send + Sync),
) -> (StatusCode, &'static str, String) {
    tracing::error!(error.message = %err, error.cause_chain = ?err, "Repository error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_type,
        "An unexpected error occurred".to_string(),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),

            ApiError::IssuedItem(err) => match err {
                // 404 Not Found - リクエストされたリソースが存在しない
                IssuedItemApplicationError::IssuedItemNotFound(_) => {
                    (StatusCode::NOT_FOUND, "ISSUED_ITEM_NOT_FOUND", err.to_string())
                }
                IssuedItemApplicationError::NoIssuableRecord(_) => {
                    (StatusCode::NOT_FOUND, "NO_ISSUABLE_RECORD", err.to_string())
                }

                // 422 Unprocessable Entity - ビジネスルール違反
                IssuedItemApplicationError::ItemNotFound(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ITEM_NOT_FOUND",
                    err.to_string(),
                ),
                IssuedItemApplicationError::MemberNotFound(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "MEMBER_NOT_FOUND",
                    err.to_string(),
                ),
                IssuedItemApplicationError::InvalidIssuedItemState(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_ISSUED_ITEM_STATE",
                    err.to_string(),
                ),
                IssuedItemApplicationError::DomainError(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DOMAIN_ERROR",
                    err.to_string(),
                ),

                // 409 Conflict - 同じ1冊への同時貸出
                IssuedItemApplicationError::CopyAlreadyIssued => (
                    StatusCode::CONFLICT,
                    "COPY_ALREADY_ISSUED",
                    err.to_string(),
                ),

                // 500 Internal Server Error - 保存値の不整合とシステム障害
                IssuedItemApplicationError::InvalidConfiguration(ref msg) => {
                    tracing::error!("Invalid configuration: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVALID_CONFIGURATION",
                        "An unexpected error occurred".to_string(),
                    )
                }
                IssuedItemApplicationError::RepositoryError(ref e) => {
                    internal_error("REPOSITORY_ERROR", e.as_ref())
                }
            },

            ApiError::Catalog(err) => match err {
                CatalogApplicationError::ItemNotFound(_) => {
                    (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND", err.to_string())
                }
                CatalogApplicationError::MemberNotFound(_) => {
                    (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND", err.to_string())
                }
                CatalogApplicationError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg)
                }
                CatalogApplicationError::InvalidConfiguration(ref msg) => {
                    tracing::error!("Invalid configuration: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVALID_CONFIGURATION",
                        "An unexpected error occurred".to_string(),
                    )
                }
                CatalogApplicationError::RepositoryError(ref e) => {
                    internal_error("REPOSITORY_ERROR", e.as_ref())
                }
            },
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
