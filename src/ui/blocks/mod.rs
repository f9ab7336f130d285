pub mod header;
pub mod messages;
pub mod summary;
