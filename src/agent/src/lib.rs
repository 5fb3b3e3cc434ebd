pub mod catalog;
pub mod client;
pub mod error;
pub mod strategy;

pub use error::{AgentError, Result};
