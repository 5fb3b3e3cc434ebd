use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to run checker {program:?}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
