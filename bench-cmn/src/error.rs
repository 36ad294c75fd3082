use thiserror::Error;

pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before an answer to \"{0}\" was given")]
    Closed(String),
}
