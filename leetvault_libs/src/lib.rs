pub mod api;
pub mod catalog;
pub mod view;

pub use api::FieldList;
pub use leetvault_derive::FieldList;
