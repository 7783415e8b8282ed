use axum::body::Body;
use axum::http::{Request, StatusCode};
use library_circulation::api::handlers::AppState;
use library_circulation::api::router::create_router;
use library_circulation::application::issued_item::FirstAvailable;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

mod common;

// ============================================================================
// APIテスト用のヘルパー関数
// ============================================================================

/// インメモリアダプターでルーターを組み立てる
fn setup_app() -> axum::Router {
    let service_deps = common::in_memory_deps(Arc::new(FirstAvailable));
    create_router(Arc::new(AppState { service_deps }))
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

/// 資料を1件、登録番号を `copies` 冊、会員を1人登録する
async fn setup_catalog(app: &axum::Router, copies: usize, member_type: &str) -> (String, String) {
    let (status, item) = send(app, "POST", "/items", Some(json!({ "title": "Item To Issue" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let item_id = item["item_id"].as_str().unwrap().to_string();

    for _ in 0..copies {
        let (status, _) = send(
            app,
            "POST",
            &format!("/items/{}/accession-records", item_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, member) = send(
        app,
        "POST",
        "/members",
        Some(json!({ "name": "Test Member", "member_type": member_type })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let member_id = member["member_id"].as_str().unwrap().to_string();

    (item_id, member_id)
}

// ============================================================================
// 正常系
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_full_issue_flow() {
    let app = setup_app();
    let (item_id, member_id) = setup_catalog(&app, 1, "faculty").await;

    // Step 1: 貸出可能な1冊
    let (status, record) = send(&app, "GET", &format!("/items/{}/issuable-record", item_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["item_id"], item_id.as_str());

    // Step 2: 貸出
    let (status, issued) = send(
        &app,
        "POST",
        "/issued-items",
        Some(json!({ "item_id": item_id, "member_id": member_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(issued["member_type"], "faculty");
    assert_eq!(issued["is_returned"], false);
    assert_eq!(issued["late_fee"], 0);
    assert_eq!(issued["accession_record_id"], record["accession_record_id"]);
    let issued_item_id = issued["issued_item_id"].as_str().unwrap().to_string();

    // Step 3: 貸出中なので貸出可能な1冊はない
    let (status, body) = send(&app, "GET", &format!("/items/{}/issuable-record", item_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NO_ISSUABLE_RECORD");

    let (status, available) = send(&app, "GET", "/accession-records/issuable", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(available.as_array().unwrap().len(), 0);

    // Step 4: 照会
    let (status, fetched) = send(&app, "GET", &format!("/issued-items/{}", issued_item_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["issued_item_id"], issued_item_id.as_str());
    assert_eq!(fetched["due_date"], issued["due_date"]);

    // Step 5: 返却
    let (status, returned) = send(
        &app,
        "POST",
        &format!("/issued-items/{}/return", issued_item_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["is_returned"], true);
    assert_eq!(returned["late_fee"], 0);

    // Step 6: 再び貸出可能
    let (status, available) = send(&app, "GET", "/accession-records/issuable", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(available.as_array().unwrap().len(), 1);
}

// ============================================================================
// 異常系
// ============================================================================

#[tokio::test]
async fn test_register_member_with_unknown_type() {
    let app = setup_app();

    let (status, body) = send(
        &app,
        "POST",
        "/members",
        Some(json!({ "name": "Test Member", "member_type": "alumni" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_add_item_with_blank_title() {
    let app = setup_app();

    let (status, body) = send(&app, "POST", "/items", Some(json!({ "title": " " }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_issue_to_unknown_member() {
    let app = setup_app();
    let (item_id, _) = setup_catalog(&app, 1, "student").await;

    let (status, body) = send(
        &app,
        "POST",
        "/issued-items",
        Some(json!({ "item_id": item_id, "member_id": Uuid::new_v4() })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "MEMBER_NOT_FOUND");
}

#[tokio::test]
async fn test_return_twice() {
    let app = setup_app();
    let (item_id, member_id) = setup_catalog(&app, 1, "student").await;

    let (_, issued) = send(
        &app,
        "POST",
        "/issued-items",
        Some(json!({ "item_id": item_id, "member_id": member_id })),
    )
    .await;
    let uri = format!(
        "/issued-items/{}/return",
        issued["issued_item_id"].as_str().unwrap()
    );

    let (status, _) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "INVALID_ISSUED_ITEM_STATE");
}

#[tokio::test]
async fn test_get_unknown_issued_item() {
    let app = setup_app();

    let (status, body) = send(&app, "GET", &format!("/issued-items/{}", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "ISSUED_ITEM_NOT_FOUND");
}

#[tokio::test]
async fn test_get_unknown_item() {
    let app = setup_app();

    let (status, body) = send(&app, "GET", &format!("/items/{}", Uuid::new_v4()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "ITEM_NOT_FOUND");
}
