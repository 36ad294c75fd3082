use std::io;
use std::path::{Path, PathBuf};
use bench_cmn::init_logging;
use bench_plot::{ChartStyle, CumulativeChart, PlotConfig, csv_path_or_prompt, load_cumulative, load_font, open_image};
use clap::Parser;
use tracing::{info, warn};

/// Plots the cumulative per-kernel durations from a viewer benchmark csv.
#[derive(Parser)]
struct Args {
    /// Benchmark csv written by the viewer. Prompted for when omitted.
    csv: Option<PathBuf>,

    /// Where to save the chart
    #[arg(short, long)]
    output: Option<String>,

    /// JSON plot config. Flags take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TrueType font for chart text, instead of the bundled DejaVu Sans
    #[arg(long)]
    font: Option<String>,

    /// Also write the cumulative table as csv
    #[arg(long)]
    cumulative_csv: Option<String>,

    /// Don't open the saved chart
    #[arg(long)]
    no_show: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => PlotConfig::from_file(path)?,
        None => PlotConfig::new(),
    };
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if args.font.is_some() {
        config = config.with_font_path(args.font);
    }
    if args.cumulative_csv.is_some() {
        config = config.with_cumulative_csv(args.cumulative_csv);
    }
    if args.no_show {
        config = config.with_show(false);
    }

    let csv_path = csv_path_or_prompt(args.csv, &mut io::stdin().lock(), &mut io::stdout())?;

    let table = load_cumulative(&csv_path)?;
    info!("Loaded {} rows from {}", table.len(), csv_path.display());

    if let Some(path) = &config.cumulative_csv {
        table.write_csv_path(Path::new(path))?;
        info!("Wrote cumulative table to {path}");
    }

    if let Some(font) = &config.font_path {
        load_font(Path::new(font))?;
        info!("Using font {font}");
    }

    let output = Path::new(&config.output);
    CumulativeChart::new(&table, ChartStyle::from_config(&config)).save_png(output)?;
    info!("Saved chart to {}", output.display());

    if config.show {
        if let Err(err) = open_image(output) {
            warn!("Could not open {}: {err}", output.display());
        }
    }

    Ok(())
}
