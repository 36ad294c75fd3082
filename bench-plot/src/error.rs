use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("File IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read timing csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timing csv has no rows")]
    EmptyTable,

    #[error("Failed to draw chart: {0}")]
    Draw(String),

    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("Failed to load config: {0}")]
    Config(String),

    #[error(transparent)]
    Prompt(#[from] bench_cmn::PromptError),
}
