mod config;
mod error;
mod inputs;
mod launcher;
mod resolution;
mod run;
mod runner;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use inputs::{MODEL_FOLDER_PROMPT, RESOLUTIONS_PROMPT, RunnerArgs, VIEWER_PROMPT, resolve_config};
pub use launcher::{DryRunLauncher, LaunchStatus, Launcher, ProcessLauncher};
pub use resolution::{Resolution, parse_resolutions};
pub use run::{BenchmarkRun, ViewerInvocation};
pub use runner::{BenchmarkRunner, RunReport, plan_runs};
