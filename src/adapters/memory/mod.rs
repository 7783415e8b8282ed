//! In-memory adapters.
//!
//! Used as test doubles and for running the API without a database.

pub mod accession_record_repository;
pub mod issued_item_repository;
pub mod item_repository;
pub mod member_repository;

pub use accession_record_repository::AccessionRecordRepository as InMemoryAccessionRecordRepository;
pub use issued_item_repository::IssuedItemRepository as InMemoryIssuedItemRepository;
pub use item_repository::ItemRepository as InMemoryItemRepository;
pub use member_repository::MemberRepository as InMemoryMemberRepository;

const POISONED: &str = "in-memory store lock poisoned";
