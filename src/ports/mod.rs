pub mod accession_record_repository;
pub mod issued_item_repository;
pub mod item_repository;
pub mod member_repository;

pub use accession_record_repository::AccessionRecordRepository;
pub use issued_item_repository::{
    CopyAlreadyIssued, IssuedItemAlreadyReturned, IssuedItemRepository,
};
pub use item_repository::ItemRepository;
pub use member_repository::MemberRepository;
