use std::path::Path;
use burn::prelude::Config;
use crate::error::{self, PlotError};

#[derive(Config, Debug)]
pub struct PlotConfig {
    /// Image written after rendering, relative to the working directory.
    #[config(default = "String::from(\"cumulative_duration.png\")")]
    pub output: String,

    /// Image width in pixels.
    #[config(default = 1000)]
    pub width: u32,

    /// Image height in pixels.
    #[config(default = 600)]
    pub height: u32,

    /// Opacity of the area under each stage's line.
    #[config(default = 0.3)]
    pub fill_alpha: f64,

    #[config(default = "String::from(\"Cumulative Duration of Compute Kernels\")")]
    pub title: String,

    /// TrueType font for chart text. Common system fonts are tried when unset.
    pub font_path: Option<String>,

    /// Also write the cumulative table as csv to this path.
    pub cumulative_csv: Option<String>,

    /// Open the saved image in the desktop's image viewer.
    #[config(default = true)]
    pub show: bool,
}

impl PlotConfig {
    pub fn from_file(path: &Path) -> error::Result<Self> {
        Self::load(path).map_err(|err| PlotError::Config(format!("{}: {err}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::PlotConfig;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::new();
        assert_eq!(config.output, "cumulative_duration.png");
        assert_eq!((config.width, config.height), (1000, 600));
        assert_eq!(config.fill_alpha, 0.3);
        assert_eq!(config.font_path, None);
        assert!(config.show);
    }

    #[test]
    fn test_builder() {
        let config = PlotConfig::new()
            .with_output("out.png".to_string())
            .with_show(false)
            .with_cumulative_csv(Some("cumulative.csv".to_string()));
        assert_eq!(config.output, "out.png");
        assert!(!config.show);
        assert_eq!(config.cumulative_csv.as_deref(), Some("cumulative.csv"));
    }
}
