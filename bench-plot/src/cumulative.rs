use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::error::Result;
use crate::stage::{STAGE_COUNT, Stage};
use crate::timing::{TimeUnit, TimingRow};

#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRow {
    pub num_instances: u64,
    pub durations: [f64; STAGE_COUNT],
    /// Running sum over [`Stage::PIPELINE`] up to and including each stage.
    pub cumulative: [f64; STAGE_COUNT],
}

impl CumulativeRow {
    fn new(row: &TimingRow) -> Self {
        let mut cumulative = [0.0; STAGE_COUNT];
        let mut running = 0.0;
        for stage in Stage::PIPELINE {
            running += row.duration(stage);
            cumulative[stage.index()] = running;
        }
        Self {
            num_instances: row.num_instances,
            durations: row.durations,
            cumulative,
        }
    }

    pub fn duration(&self, stage: Stage) -> f64 {
        self.durations[stage.index()]
    }

    pub fn cumulative(&self, stage: Stage) -> f64 {
        self.cumulative[stage.index()]
    }

    /// Cumulative value of the last stage, i.e. the whole frame.
    pub fn total(&self) -> f64 {
        self.cumulative(Stage::PIPELINE[STAGE_COUNT - 1])
    }
}

/// Timing table extended with one cumulative column per stage.
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    unit: TimeUnit,
    rows: Vec<CumulativeRow>,
}

impl CumulativeTable {
    pub(crate) fn new(unit: TimeUnit, rows: &[TimingRow]) -> Self {
        Self {
            unit,
            rows: rows.iter().map(CumulativeRow::new).collect(),
        }
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn rows(&self) -> &[CumulativeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn instances(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.num_instances as f64).collect()
    }

    pub fn durations(&self, stage: Stage) -> Vec<f64> {
        self.rows.iter().map(|row| row.duration(stage)).collect()
    }

    pub fn cumulative(&self, stage: Stage) -> Vec<f64> {
        self.rows.iter().map(|row| row.cumulative(stage)).collect()
    }

    /// Looks a column up by its csv name: `num_instances`, a stage name,
    /// or a stage name with the `_cumulative` suffix.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if name == "num_instances" {
            return Some(self.instances());
        }
        if let Some(stage) = name.strip_suffix("_cumulative").and_then(Stage::from_column) {
            return Some(self.cumulative(stage));
        }
        Stage::from_column(name).map(|stage| self.durations(stage))
    }

    pub fn max_total(&self) -> f64 {
        self.rows.iter().map(CumulativeRow::total).fold(0.0, f64::max)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);

        let mut header = vec!["num_instances".to_string()];
        header.extend(Stage::PIPELINE.iter().map(|stage| stage.column().to_string()));
        header.extend(Stage::PIPELINE.iter().map(|stage| stage.cumulative_column()));
        writer.write_record(&header)?;

        for row in &self.rows {
            let mut record = vec![row.num_instances.to_string()];
            record.extend(Stage::PIPELINE.iter().map(|&stage| row.duration(stage).to_string()));
            record.extend(Stage::PIPELINE.iter().map(|&stage| row.cumulative(stage).to_string()));
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv_path(&self, path: &Path) -> Result<()> {
        self.write_csv(File::create(path)?)
    }
}
