use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use crate::config::RunnerConfig;
use crate::resolution::Resolution;

/// One (model, resolution) pairing, driving a single viewer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRun {
    pub model_dir: PathBuf,
    pub model_name: String,
    pub resolution: Resolution,
}

impl BenchmarkRun {
    pub fn new(model_dir: &Path, resolution: Resolution) -> Self {
        let model_name = model_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            model_dir: model_dir.to_path_buf(),
            model_name,
            resolution,
        }
    }

    /// `<model>_<width>x<height>`, used for the csv file name.
    pub fn basename(&self) -> String {
        format!("{}_{}", self.model_name, self.resolution)
    }

    pub fn output_csv(&self, config: &RunnerConfig) -> PathBuf {
        Path::new(&config.output_dir).join(format!("{}.csv", self.basename()))
    }

    pub fn invocation(&self, config: &RunnerConfig) -> ViewerInvocation {
        let mut args: Vec<OsString> = vec![
            "--no-gui".into(),
            "--width".into(),
            self.resolution.width.to_string().into(),
            "--height".into(),
            self.resolution.height.to_string().into(),
        ];
        if config.immediate_swapchain {
            args.push("-i".into());
        }
        if config.verbose {
            args.push("-v".into());
        }
        if config.validation {
            args.push("--validation".into());
        }
        args.push("-b".into());
        args.push(self.output_csv(config).into());
        // The model path is positional and may start with '-'.
        args.push("--".into());
        args.push(self.model_dir.clone().into());

        ViewerInvocation {
            program: config.viewer_path.clone(),
            args,
        }
    }
}

/// A fully built viewer command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ViewerInvocation {
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for ViewerInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in self.args_lossy() {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use super::BenchmarkRun;
    use crate::{Resolution, RunnerConfig};

    fn config() -> RunnerConfig {
        RunnerConfig::new(
            PathBuf::from("/models"),
            PathBuf::from("/bin/3dgs_viewer"),
            vec![Resolution::new(800, 600)],
        )
    }

    #[test]
    fn test_invocation_args() {
        let run = BenchmarkRun::new(Path::new("/models/garden"), Resolution::new(800, 600));
        assert_eq!(run.basename(), "garden_800x600");

        let invocation = run.invocation(&config());
        assert_eq!(invocation.program, PathBuf::from("/bin/3dgs_viewer"));
        assert_eq!(
            invocation.args_lossy(),
            [
                "--no-gui",
                "--width",
                "800",
                "--height",
                "600",
                "-i",
                "-v",
                "--validation",
                "-b",
                "../benchmark_output/garden_800x600.csv",
                "--",
                "/models/garden",
            ]
        );
    }

    #[test]
    fn test_invocation_without_optional_flags() {
        let config = config()
            .with_immediate_swapchain(false)
            .with_verbose(false)
            .with_validation(false)
            .with_output_dir("results".to_string());
        let run = BenchmarkRun::new(Path::new("/models/bicycle"), Resolution::new(1920, 1080));

        let args = run.invocation(&config).args_lossy();
        assert_eq!(
            args,
            [
                "--no-gui",
                "--width",
                "1920",
                "--height",
                "1080",
                "-b",
                "results/bicycle_1920x1080.csv",
                "--",
                "/models/bicycle",
            ]
        );
    }

    #[test]
    fn test_display_quotes_spaces() {
        let run = BenchmarkRun::new(Path::new("/my models/room"), Resolution::new(640, 480));
        let line = run.invocation(&config()).to_string();
        assert!(line.starts_with("/bin/3dgs_viewer --no-gui --width 640"));
        assert!(line.ends_with("-- \"/my models/room\""));
    }
}
