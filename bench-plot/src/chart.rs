use std::fmt::Display;
use std::ops::Range;
use std::path::Path;
use plotters::coord::Shift;
use plotters::prelude::*;
use crate::config::PlotConfig;
use crate::cumulative::CumulativeTable;
use crate::error::{PlotError, Result};
use crate::font::{FONT_FAMILY, ensure_font};
use crate::stage::{STAGE_COUNT, Stage};

/// matplotlib's default colour cycle, one entry per pipeline stage.
pub const STAGE_COLORS: [RGBColor; STAGE_COUNT] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub fill_alpha: f64,
}

impl ChartStyle {
    pub fn from_config(config: &PlotConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            title: config.title.clone(),
            fill_alpha: config.fill_alpha,
            ..Self::default()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            title: "Cumulative Duration of Compute Kernels".to_string(),
            x_desc: "Number of Instances".to_string(),
            y_desc: "Milliseconds".to_string(),
            fill_alpha: 0.3,
        }
    }
}

/// Filled region between a stage's cumulative line and the one below it.
#[derive(Debug, Clone)]
pub struct Band {
    pub stage: Stage,
    pub color: RGBColor,
    pub lower: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
}

impl Band {
    /// Closed polygon: along the upper line, back along the lower one.
    pub fn outline(&self) -> Vec<(f64, f64)> {
        self.upper
            .iter()
            .chain(self.lower.iter().rev())
            .copied()
            .collect()
    }
}

/// Stacked area chart of cumulative kernel durations against instance count.
pub struct CumulativeChart<'a> {
    table: &'a CumulativeTable,
    style: ChartStyle,
}

fn draw_err<E: Display>(err: E) -> PlotError {
    PlotError::Draw(err.to_string())
}

impl<'a> CumulativeChart<'a> {
    pub fn new(table: &'a CumulativeTable, style: ChartStyle) -> Self {
        Self { table, style }
    }

    /// One band per stage in pipeline order. The first band starts at zero.
    pub fn bands(&self) -> Vec<Band> {
        let instances = self.table.instances();
        let mut lower: Vec<(f64, f64)> = instances.iter().map(|&x| (x, 0.0)).collect();

        Stage::PIPELINE
            .into_iter()
            .map(|stage| {
                let upper: Vec<(f64, f64)> = instances
                    .iter()
                    .copied()
                    .zip(self.table.cumulative(stage))
                    .collect();
                Band {
                    stage,
                    color: STAGE_COLORS[stage.index()],
                    lower: std::mem::replace(&mut lower, upper.clone()),
                    upper,
                }
            })
            .collect()
    }

    pub fn x_range(&self) -> Range<f64> {
        let instances = self.table.instances();
        let min = instances.iter().copied().fold(f64::INFINITY, f64::min);
        let max = instances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        if min == max {
            return (min - 0.5)..(max + 0.5);
        }
        min..max
    }

    pub fn y_range(&self) -> Range<f64> {
        let max = self.table.max_total();
        if max > 0.0 { 0.0..max * 1.05 } else { 0.0..1.0 }
    }

    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        if self.table.is_empty() {
            return Err(PlotError::EmptyTable);
        }
        ensure_font()?;

        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(root)
            .margin(15)
            .caption(&self.style.title, (FONT_FAMILY, 22))
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(self.x_range(), self.y_range())
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(self.style.x_desc.as_str())
            .y_desc(self.style.y_desc.as_str())
            .label_style((FONT_FAMILY, 14))
            .draw()
            .map_err(draw_err)?;

        let bands = self.bands();
        for band in &bands {
            let fill = band.color.mix(self.style.fill_alpha).filled();
            chart
                .draw_series(std::iter::once(Polygon::new(band.outline(), fill)))
                .map_err(draw_err)?;
        }

        // Lines go on top of every fill.
        for band in &bands {
            let color = band.color;
            chart
                .draw_series(LineSeries::new(band.upper.iter().copied(), color.stroke_width(2)))
                .map_err(draw_err)?
                .label(band.stage.column())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, 14))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;

        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.style.width, self.style.height)).into_drawing_area();
        self.draw(&root)?;
        root.present().map_err(draw_err)
    }

    /// Renders into an in-memory RGB buffer of `width * height * 3` bytes.
    pub fn render_rgb(&self) -> Result<Vec<u8>> {
        let (width, height) = (self.style.width, self.style.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(draw_err)?;
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use plotters::style::Color;
    use super::{ChartStyle, CumulativeChart, STAGE_COLORS};
    use crate::{CumulativeTable, Stage, TimingTable};

    const CSV: &str = "num_instances,preprocess,prefix_sum,preprocess_sort,sort,tile_boundary,render\n\
                       4,4e6,1e6,1e6,2e6,1e6,3e6\n\
                       1,1e6,1e6,0,0,0,0\n\
                       2,2e6,1e6,5e5,1e6,5e5,2e6\n";

    fn table() -> CumulativeTable {
        let mut table = TimingTable::from_reader(CSV.as_bytes()).expect("valid csv");
        table.convert_to_millis();
        table.sort_by_instances();
        table.cumulative()
    }

    fn small_style() -> ChartStyle {
        ChartStyle {
            width: 320,
            height: 200,
            ..ChartStyle::default()
        }
    }

    #[test]
    fn test_bands_stack_in_pipeline_order() {
        let table = table();
        let chart = CumulativeChart::new(&table, small_style());
        let bands = chart.bands();

        assert_eq!(bands.len(), Stage::PIPELINE.len());
        assert!(bands[0].lower.iter().all(|&(_, y)| y == 0.0));
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.stage, Stage::PIPELINE[i]);
            assert_eq!(band.color.rgb(), STAGE_COLORS[i].rgb());
            let ys: Vec<f64> = band.upper.iter().map(|&(_, y)| y).collect();
            assert_eq!(ys, table.cumulative(band.stage));
            if i > 0 {
                assert_eq!(band.lower, bands[i - 1].upper);
            }
        }

        let outline = bands[1].outline();
        assert_eq!(outline.len(), 6);
        assert_eq!(outline[0], (1.0, 2.0));
        assert_eq!(outline[5], (1.0, 1.0));
    }

    #[test]
    fn test_ranges() {
        let table = table();
        let chart = CumulativeChart::new(&table, small_style());
        assert_eq!(chart.x_range(), 1.0..4.0);

        let y = chart.y_range();
        assert_eq!(y.start, 0.0);
        assert!((y.end - 12.0 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_single_row_range_is_not_degenerate() {
        let csv = "num_instances,preprocess,prefix_sum,preprocess_sort,sort,tile_boundary,render\n7,0,0,0,0,0,0\n";
        let table = TimingTable::from_reader(csv.as_bytes()).expect("valid csv").cumulative();
        let chart = CumulativeChart::new(&table, small_style());
        assert_eq!(chart.x_range(), 6.5..7.5);
        assert_eq!(chart.y_range(), 0.0..1.0);
        chart.render_rgb().expect("render");
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = table();
        let chart = CumulativeChart::new(&table, small_style());

        let first = chart.render_rgb().expect("render");
        let second = chart.render_rgb().expect("render");
        assert_eq!(first.len(), 320 * 200 * 3);
        assert_eq!(first, second);
        // Something other than the white background got drawn.
        assert!(first.iter().any(|&b| b != 255));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let table = table();
        let chart = CumulativeChart::new(&table, small_style());

        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        chart.save_png(&first).expect("save");
        chart.save_png(&second).expect("save");

        let image = image::open(&first).expect("decode png");
        assert_eq!((image.width(), image.height()), (320, 200));
        assert_eq!(
            std::fs::read(&first).expect("read"),
            std::fs::read(&second).expect("read")
        );
    }

    #[test]
    fn test_default_style_draws_title() {
        let table = table();
        let style = ChartStyle::default();
        let (width, height) = (style.width as usize, style.height as usize);
        let chart = CumulativeChart::new(&table, style);
        let pixels = chart.render_rgb().expect("render");
        assert_eq!(pixels.len(), width * height * 3);

        // The caption sits centred below the top margin, above the plot area.
        let title_ink = (15..40)
            .flat_map(|y| (350..650).map(move |x| (y * width + x) * 3))
            .filter(|&i| pixels[i..i + 3] != [255, 255, 255])
            .count();
        assert!(title_ink > 50, "title area is blank ({title_ink} pixels)");
    }
}
