use std::path::{Path, PathBuf};
use burn::prelude::Config;
use crate::error::{self, RunnerError};
use crate::resolution::Resolution;

#[derive(Config, Debug)]
pub struct RunnerConfig {
    /// Folder holding one sub-folder per model.
    pub model_folder: PathBuf,

    /// Viewer executable to benchmark.
    pub viewer_path: PathBuf,

    /// Every model is benchmarked once per resolution.
    pub resolutions: Vec<Resolution>,

    /// Directory the viewer writes its csv files to. Relative paths resolve
    /// against the viewer's working directory, which is inherited from the runner.
    ///
    /// The runner never creates this directory.
    #[config(default = "String::from(\"../benchmark_output\")")]
    pub output_dir: String,

    /// Pass `-i` (immediate swapchain) to the viewer.
    #[config(default = true)]
    pub immediate_swapchain: bool,

    /// Pass `-v` (verbose logging) to the viewer.
    #[config(default = true)]
    pub verbose: bool,

    /// Pass `--validation` (Vulkan validation layers) to the viewer.
    #[config(default = true)]
    pub validation: bool,
}

impl RunnerConfig {
    pub fn from_file(path: &Path) -> error::Result<Self> {
        Self::load(path).map_err(|err| RunnerError::Config(format!("{}: {err}", path.display())))
    }
}
