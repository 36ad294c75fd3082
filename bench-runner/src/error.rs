use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Model folder is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to list model folder: {0}")]
    ModelFolder(#[from] walkdir::Error),

    #[error("Invalid resolution \"{0}\": expected WIDTHxHEIGHT")]
    InvalidResolution(String),

    #[error("Failed to launch {}: {source}", program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load config: {0}")]
    Config(String),

    #[error(transparent)]
    Prompt(#[from] bench_cmn::PromptError),
}
