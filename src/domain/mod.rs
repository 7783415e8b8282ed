pub mod catalog;
pub mod commands;
pub mod errors;
pub mod issued_item;
pub mod value_objects;

pub use catalog::{AccessionRecord, Item, Member};
pub use errors::*;
pub use issued_item::IssuedItem;
pub use value_objects::*;
