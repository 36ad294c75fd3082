use std::io::{BufRead, Write};
use std::path::PathBuf;
use bench_cmn::prompt;
use clap::Parser;
use crate::config::RunnerConfig;
use crate::error::Result;
use crate::resolution::parse_resolutions;

pub const RESOLUTIONS_PROMPT: &str = "Please enter the resolutions (separated by comma): ";
pub const MODEL_FOLDER_PROMPT: &str = "Please enter the folder containing model folders: ";
pub const VIEWER_PROMPT: &str = "Please enter the 3dgs_viewer path: ";

/// Runs the splat viewer in benchmark mode for every model folder and resolution.
#[derive(Parser, Debug, Default)]
#[command(name = "bench-runner")]
pub struct RunnerArgs {
    /// Folder containing one sub-folder per model
    #[arg(short, long, env = "MODEL_FOLDER_PATH")]
    pub model_folder: Option<PathBuf>,

    /// Path to the viewer executable
    #[arg(short = 'e', long, env = "3DGS_VIEWER_PATH")]
    pub viewer: Option<PathBuf>,

    /// Comma separated resolutions, e.g. 800x600,1920x1080
    #[arg(short, long)]
    pub resolutions: Option<String>,

    /// Directory the viewer writes its csv files to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// JSON runner config. Flags and environment variables take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Don't pass -i to the viewer
    #[arg(long)]
    pub no_immediate_swapchain: bool,

    /// Don't pass -v to the viewer
    #[arg(long)]
    pub quiet_viewer: bool,

    /// Don't pass --validation to the viewer
    #[arg(long)]
    pub no_validation: bool,

    /// Log the viewer commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunnerArgs {
    /// Loads the `--config` file, if one was given.
    pub fn file_config(&self) -> Result<Option<RunnerConfig>> {
        self.config.as_deref().map(RunnerConfig::from_file).transpose()
    }
}

/// Merges flags, environment and the config file into one [`RunnerConfig`].
///
/// Flags and environment variables win over the file. Whatever is still
/// missing is asked for on `output` and read from `input`, in the order
/// resolutions, model folder, viewer.
pub fn resolve_config<R: BufRead, W: Write>(
    args: &RunnerArgs,
    file: Option<RunnerConfig>,
    input: &mut R,
    output: &mut W,
) -> Result<RunnerConfig> {
    let resolutions = match (&args.resolutions, &file) {
        (Some(list), _) => parse_resolutions(list)?,
        (None, Some(file)) => file.resolutions.clone(),
        (None, None) => parse_resolutions(&prompt(input, output, RESOLUTIONS_PROMPT)?)?,
    };
    let model_folder = match (&args.model_folder, &file) {
        (Some(path), _) => path.clone(),
        (None, Some(file)) => file.model_folder.clone(),
        (None, None) => prompt(input, output, MODEL_FOLDER_PROMPT)?.trim().into(),
    };
    let viewer_path = match (&args.viewer, &file) {
        (Some(path), _) => path.clone(),
        (None, Some(file)) => file.viewer_path.clone(),
        (None, None) => prompt(input, output, VIEWER_PROMPT)?.trim().into(),
    };

    let mut config = RunnerConfig::new(model_folder, viewer_path, resolutions);
    if let Some(file) = file {
        config = config
            .with_output_dir(file.output_dir)
            .with_immediate_swapchain(file.immediate_swapchain)
            .with_verbose(file.verbose)
            .with_validation(file.validation);
    }
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_dir(output_dir.clone());
    }
    if args.no_immediate_swapchain {
        config = config.with_immediate_swapchain(false);
    }
    if args.quiet_viewer {
        config = config.with_verbose(false);
    }
    if args.no_validation {
        config = config.with_validation(false);
    }
    Ok(config)
}
