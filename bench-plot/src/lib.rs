mod chart;
mod config;
mod cumulative;
mod error;
mod font;
mod stage;
mod timing;
mod viewer;

pub use chart::{Band, ChartStyle, CumulativeChart, STAGE_COLORS};
pub use config::PlotConfig;
pub use cumulative::{CumulativeRow, CumulativeTable};
pub use error::PlotError;
pub use font::{FONT_FAMILY, ensure_font, load_font};
pub use stage::{STAGE_COUNT, Stage};
pub use timing::{TimeUnit, TimingRow, TimingTable};
pub use viewer::open_image;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use bench_cmn::prompt;
use crate::error::Result;

pub const CSV_PROMPT: &str = "Enter the path to the CSV file: ";

/// Returns `csv` when given, otherwise asks for the path on `output` and
/// reads it from `input`.
pub fn csv_path_or_prompt<R: BufRead, W: Write>(
    csv: Option<PathBuf>,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    match csv {
        Some(path) => Ok(path),
        None => Ok(prompt(input, output, CSV_PROMPT)?.trim().into()),
    }
}

/// Loads a benchmark csv and applies the full transform: ns to ms, sort by
/// instance count, cumulative sums in pipeline order.
pub fn load_cumulative(path: &Path) -> Result<CumulativeTable> {
    let mut table = TimingTable::from_path(path)?;
    table.convert_to_millis();
    table.sort_by_instances();
    Ok(table.cumulative())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;
    use super::{CSV_PROMPT, csv_path_or_prompt, load_cumulative};
    use crate::{PlotError, Stage, TimeUnit};

    #[test]
    fn test_csv_path_argument_skips_prompt() {
        let mut input = Cursor::new("ignored.csv\n");
        let mut output = Vec::new();
        let path = csv_path_or_prompt(Some(PathBuf::from("given.csv")), &mut input, &mut output).expect("path");
        assert_eq!(path, PathBuf::from("given.csv"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_csv_path_prompted() {
        let mut input = Cursor::new("  out/garden_800x600.csv \n");
        let mut output = Vec::new();
        let path = csv_path_or_prompt(None, &mut input, &mut output).expect("path");
        assert_eq!(path, PathBuf::from("out/garden_800x600.csv"));
        assert_eq!(output, CSV_PROMPT.as_bytes());
    }

    #[test]
    fn test_csv_prompt_closed_input() {
        let mut input = Cursor::new("");
        let err = csv_path_or_prompt(None, &mut input, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, PlotError::Prompt(_)));
    }

    #[test]
    fn test_load_cumulative_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("garden_800x600.csv");
        std::fs::write(
            &path,
            "num_instances,render,tile_boundary,sort,preprocess_sort,prefix_sum,preprocess\n\
             300,3000000,0,0,0,0,3000000\n\
             100,1000000,0,0,0,0,1000000\n\
             200,2000000,0,0,0,0,2000000\n",
        )
        .expect("write csv");

        let table = load_cumulative(&path).expect("load");
        assert_eq!(table.unit(), TimeUnit::Milliseconds);
        assert_eq!(table.instances(), [100.0, 200.0, 300.0]);
        assert!(table.instances().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.cumulative(Stage::Render), [2.0, 4.0, 6.0]);
        assert_eq!(table.cumulative(Stage::TileBoundary), [1.0, 2.0, 3.0]);
    }
}
