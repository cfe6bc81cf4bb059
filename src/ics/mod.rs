pub mod event;
pub mod format;
pub mod store;
