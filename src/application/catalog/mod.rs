mod catalog_service;
mod errors;

pub use catalog_service::{
    add_accession_record, add_item, get_item, get_member, list_items, register_member,
};
pub use errors::{CatalogApplicationError, Result};
