pub mod entry;
pub mod pagination;
