//! PostgreSQLアダプターのテスト
//!
//! 実際のデータベースが必要なため通常は実行されない。
//! `DATABASE_URL` を設定して `cargo test -- --ignored` で実行する。

mod common;

use chrono::{DateTime, Duration, Utc};
use library_circulation::adapters::postgres::{
    PostgresAccessionRecordRepository, PostgresIssuedItemRepository, PostgresItemRepository,
    PostgresMemberRepository,
};
use library_circulation::domain::catalog::{new_accession_record, new_item, new_member};
use library_circulation::domain::issued_item::{issue_item, return_item};
use library_circulation::domain::*;
use library_circulation::ports::*;
use serial_test::serial;
use sqlx::PgPool;

/// PostgreSQLの時刻精度（マイクロ秒）に合わせて丸める
fn truncate_to_micros(dt: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(dt.timestamp_micros()).expect("Invalid timestamp")
}

/// テストの独立性を保つため、各テスト前にすべてのデータを削除する
async fn cleanup_database(pool: &PgPool) {
    sqlx::query("TRUNCATE TABLE issued_items, accession_records, members, items CASCADE")
        .execute(pool)
        .await
        .expect("Failed to truncate tables");
}

struct Repositories {
    items: PostgresItemRepository,
    records: PostgresAccessionRecordRepository,
    members: PostgresMemberRepository,
    issued_items: PostgresIssuedItemRepository,
}

async fn setup() -> Repositories {
    let pool = common::create_test_pool().await;
    cleanup_database(&pool).await;

    Repositories {
        items: PostgresItemRepository::new(pool.clone()),
        records: PostgresAccessionRecordRepository::new(pool.clone()),
        members: PostgresMemberRepository::new(pool.clone()),
        issued_items: PostgresIssuedItemRepository::new(pool),
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_catalog_save_and_get() {
    let repos = setup().await;

    let item = new_item("Item To Issue").unwrap();
    repos.items.save(item.clone()).await.unwrap();
    assert_eq!(repos.items.get_by_id(item.item_id).await.unwrap(), Some(item.clone()));

    let member = new_member("Test Member", MemberType::Faculty).unwrap();
    repos.members.save(member.clone()).await.unwrap();
    assert_eq!(
        repos.members.get_by_id(member.member_id).await.unwrap(),
        Some(member)
    );

    let records: Vec<AccessionRecord> = (0..3).map(|_| new_accession_record(&item)).collect();
    for record in &records {
        repos.records.save(record.clone()).await.unwrap();
    }

    // 登録順に返る
    assert_eq!(repos.records.get_all_accession_records().await.unwrap(), records);
    assert_eq!(
        repos
            .records
            .get_by_id(records[1].accession_record_id)
            .await
            .unwrap(),
        Some(records[1].clone())
    );
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_issued_item_save_return_and_reload() {
    let repos = setup().await;

    let item = new_item("Item To Issue").unwrap();
    repos.items.save(item.clone()).await.unwrap();
    let record = new_accession_record(&item);
    repos.records.save(record.clone()).await.unwrap();
    let member = new_member("Test Member", MemberType::Student).unwrap();
    repos.members.save(member.clone()).await.unwrap();

    let issued_at = truncate_to_micros(Utc::now());
    let issued = issue_item(&record, item.item_id, &member, issued_at, LateFeePerDay::new(5)).unwrap();
    repos.issued_items.save(issued.clone()).await.unwrap();

    let loaded = repos
        .issued_items
        .get_by_id(issued.issued_item_id)
        .await
        .unwrap()
        .expect("issued item should exist");
    assert_eq!(loaded, issued);

    let returned_at = truncate_to_micros(issued_at + Duration::days(3));
    let returned = return_item(&issued, returned_at).unwrap();
    repos.issued_items.save(returned.clone()).await.unwrap();

    let all = repos.issued_items.get_all_issued_items().await.unwrap();
    assert_eq!(all, vec![returned]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_second_open_loan_for_same_copy_is_rejected() {
    let repos = setup().await;

    let item = new_item("Item To Issue").unwrap();
    repos.items.save(item.clone()).await.unwrap();
    let record = new_accession_record(&item);
    repos.records.save(record.clone()).await.unwrap();
    let member = new_member("Test Member", MemberType::Faculty).unwrap();
    repos.members.save(member.clone()).await.unwrap();

    let now = truncate_to_micros(Utc::now());
    let first = issue_item(&record, item.item_id, &member, now, LateFeePerDay::new(5)).unwrap();
    let second = issue_item(&record, item.item_id, &member, now, LateFeePerDay::new(5)).unwrap();

    repos.issued_items.save(first).await.unwrap();
    let err = repos
        .issued_items
        .save(second)
        .await
        .expect_err("second open loan must be rejected");
    assert!(err.downcast_ref::<CopyAlreadyIssued>().is_some());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_returned_issued_item_is_not_overwritten() {
    let repos = setup().await;

    let item = new_item("Item To Issue").unwrap();
    repos.items.save(item.clone()).await.unwrap();
    let record = new_accession_record(&item);
    repos.records.save(record.clone()).await.unwrap();
    let member = new_member("Test Member", MemberType::Student).unwrap();
    repos.members.save(member.clone()).await.unwrap();

    let issued_at = truncate_to_micros(Utc::now() - Duration::days(30));
    let issued = issue_item(&record, item.item_id, &member, issued_at, LateFeePerDay::new(5)).unwrap();
    repos.issued_items.save(issued.clone()).await.unwrap();

    let first_returned_at = issued_at + Duration::days(1);
    let first = return_item(&issued, first_returned_at).unwrap();
    let second = return_item(&issued, issued_at + Duration::days(20)).unwrap();

    repos.issued_items.save(first).await.unwrap();
    let err = repos
        .issued_items
        .save(second)
        .await
        .expect_err("returned issued item must not be overwritten");
    assert!(err.downcast_ref::<IssuedItemAlreadyReturned>().is_some());

    let stored = repos
        .issued_items
        .get_by_id(issued.issued_item_id)
        .await
        .unwrap()
        .expect("issued item should exist");
    assert_eq!(stored.return_date, Some(first_returned_at));
}
