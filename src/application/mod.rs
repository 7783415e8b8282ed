pub mod catalog;
mod dependencies;
pub mod issued_item;

pub use dependencies::ServiceDependencies;
