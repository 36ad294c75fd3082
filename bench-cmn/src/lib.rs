mod error;
mod logging;
mod prompt;

pub use error::PromptError;
pub use logging::init_logging;
pub use prompt::prompt;
