use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};
use crate::error::Result;

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn opener(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Shows an image with the desktop's default viewer.
pub fn open_image(path: &Path) -> Result<()> {
    let mut command = opener(path);
    debug!("Opening {} with {:?}", path.display(), command.get_program());

    let status = command.status()?;
    if !status.success() {
        warn!("Image viewer exited with {status}");
    }
    Ok(())
}
