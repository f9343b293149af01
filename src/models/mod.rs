pub mod event;
pub mod summary;
