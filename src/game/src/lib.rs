pub mod config;
pub mod entrypoint;
pub mod error;
pub mod model;
pub mod service;

pub use error::{GameError, Result};
