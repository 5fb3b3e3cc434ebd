use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to read player input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a valid move was entered")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, AgentError>;
