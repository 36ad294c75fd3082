use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::launcher::{LaunchStatus, Launcher};
use crate::resolution::Resolution;
use crate::run::BenchmarkRun;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub basename: String,
    pub status: LaunchStatus,
}

/// Lists the model folder and pairs every model directory with every resolution.
///
/// Only immediate entries are considered and anything that is not a directory
/// (after following symlinks) is skipped. Models are visited in file name order.
pub fn plan_runs(model_folder: &Path, resolutions: &[Resolution]) -> Result<Vec<BenchmarkRun>> {
    if !model_folder.is_dir() {
        return Err(RunnerError::NotADirectory(model_folder.to_path_buf()));
    }

    let mut runs = Vec::new();
    for entry in WalkDir::new(model_folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            debug!("Skipping non-directory {}", path.display());
            continue;
        }

        runs.extend(
            resolutions
                .iter()
                .map(|&resolution| BenchmarkRun::new(path, resolution)),
        );
    }
    Ok(runs)
}

pub struct BenchmarkRunner<L> {
    config: RunnerConfig,
    launcher: L,
}

impl<L: Launcher> BenchmarkRunner<L> {
    pub fn new(config: RunnerConfig, launcher: L) -> Self {
        Self { config, launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn plan(&self) -> Result<Vec<BenchmarkRun>> {
        plan_runs(&self.config.model_folder, &self.config.resolutions)
    }

    /// Runs every planned benchmark one after another.
    ///
    /// A viewer that exits unsuccessfully is reported and the loop carries on.
    /// A viewer that cannot be spawned at all aborts the remaining runs.
    pub async fn run(&mut self) -> Result<Vec<RunReport>> {
        let runs = self.plan()?;
        if runs.is_empty() {
            warn!(
                "Nothing to run: no model folders in {} or no resolutions given",
                self.config.model_folder.display()
            );
        }

        let mut reports = Vec::with_capacity(runs.len());
        for run in runs {
            let basename = run.basename();
            info!("Running benchmark for {basename}");

            let invocation = run.invocation(&self.config);
            debug!("{invocation}");

            let status = self.launcher.launch(&invocation).await?;
            if !status.success() {
                match status.code {
                    Some(code) => warn!("Viewer exited with status {code} for {basename}"),
                    None => warn!("Viewer was terminated by a signal for {basename}"),
                }
            }
            reports.push(RunReport { basename, status });
        }

        let failed = reports.iter().filter(|r| !r.status.success()).count();
        info!("Finished {} benchmark runs, {failed} failed", reports.len());
        Ok(reports)
    }
}
