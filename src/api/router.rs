use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, add_accession_record, add_item, get_issuable_record, get_issued_item, get_item,
    get_member, issue_item, list_issuable_records, list_items, register_member, return_item,
};

/// Creates the API router with all circulation endpoints
///
/// Catalog:
/// - POST /items, GET /items, GET /items/:id
/// - POST /items/:id/accession-records
/// - POST /members, GET /members/:id
///
/// Availability:
/// - GET /accession-records/issuable
/// - GET /items/:id/issuable-record
///
/// Issued items:
/// - POST /issued-items
/// - GET /issued-items/:id
/// - POST /issued-items/:id/return
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/items", post(add_item).get(list_items))
        .route("/items/:id", get(get_item))
        .route("/items/:id/accession-records", post(add_accession_record))
        .route("/items/:id/issuable-record", get(get_issuable_record))
        .route("/accession-records/issuable", get(list_issuable_records))
        .route("/members", post(register_member))
        .route("/members/:id", get(get_member))
        .route("/issued-items", post(issue_item))
        .route("/issued-items/:id", get(get_issued_item))
        .route("/issued-items/:id/return", post(return_item))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
