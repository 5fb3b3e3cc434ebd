use std::path::PathBuf;

use agent::AgentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("Failed to write transcript {path:?}: {source}")]
    Transcript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write game output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Match has already been played")]
    AlreadyPlayed,
}

pub type Result<T> = std::result::Result<T, GameError>;
