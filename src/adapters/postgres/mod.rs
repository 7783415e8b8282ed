pub mod accession_record_repository;
pub mod issued_item_repository;
pub mod item_repository;
pub mod member_repository;

// パブリックに型を再エクスポート
pub use accession_record_repository::AccessionRecordRepository as PostgresAccessionRecordRepository;
pub use issued_item_repository::IssuedItemRepository as PostgresIssuedItemRepository;
pub use item_repository::ItemRepository as PostgresItemRepository;
pub use member_repository::MemberRepository as PostgresMemberRepository;

/// 行データの変換エラーを作る
fn invalid_data(message: String) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message))
}
