use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;
use crate::error::{Result, RunnerError};
use crate::run::ViewerInvocation;

/// How a viewer invocation ended. `code` is `None` when the process was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    pub code: Option<i32>,
}

impl LaunchStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one viewer invocation to completion.
#[async_trait]
pub trait Launcher: Send {
    async fn launch(&mut self, invocation: &ViewerInvocation) -> Result<LaunchStatus>;
}

/// Spawns the viewer as a child process sharing the runner's stdio and
/// working directory, and waits for it to exit.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&mut self, invocation: &ViewerInvocation) -> Result<LaunchStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .await
            .map_err(|source| RunnerError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        Ok(LaunchStatus { code: status.code() })
    }
}

/// Logs the command line instead of running it.
#[derive(Debug, Default)]
pub struct DryRunLauncher;

#[async_trait]
impl Launcher for DryRunLauncher {
    async fn launch(&mut self, invocation: &ViewerInvocation) -> Result<LaunchStatus> {
        info!("[dry run] {invocation}");
        Ok(LaunchStatus { code: Some(0) })
    }
}
