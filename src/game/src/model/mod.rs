pub mod narration;
pub mod summary;
