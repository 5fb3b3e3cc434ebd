pub mod checker;
pub mod entrypoint;
pub mod error;
pub mod report;

pub use error::{ReportError, Result};
