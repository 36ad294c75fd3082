use std::fs::File;
use std::io;
use std::path::Path;
use serde::Deserialize;
use crate::cumulative::CumulativeTable;
use crate::error::{PlotError, Result};
use crate::stage::{STAGE_COUNT, Stage};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanoseconds,
    Milliseconds,
}

// Matched against the csv header by name, extra columns are ignored.
#[derive(Debug, Deserialize)]
struct TimingRecord {
    num_instances: u64,
    preprocess: f64,
    prefix_sum: f64,
    preprocess_sort: f64,
    sort: f64,
    tile_boundary: f64,
    render: f64,
}

impl From<TimingRecord> for TimingRow {
    fn from(record: TimingRecord) -> Self {
        let mut durations = [0.0; STAGE_COUNT];
        durations[Stage::Preprocess.index()] = record.preprocess;
        durations[Stage::PrefixSum.index()] = record.prefix_sum;
        durations[Stage::PreprocessSort.index()] = record.preprocess_sort;
        durations[Stage::Sort.index()] = record.sort;
        durations[Stage::TileBoundary.index()] = record.tile_boundary;
        durations[Stage::Render.index()] = record.render;
        Self {
            num_instances: record.num_instances,
            durations,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    pub num_instances: u64,
    /// Indexed by [`Stage::index`].
    pub durations: [f64; STAGE_COUNT],
}

impl TimingRow {
    pub fn duration(&self, stage: Stage) -> f64 {
        self.durations[stage.index()]
    }
}

/// Per-stage kernel timings, one row per measurement.
#[derive(Debug, Clone)]
pub struct TimingTable {
    unit: TimeUnit,
    rows: Vec<TimingRow>,
}

impl TimingTable {
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Reads the viewer's csv. Durations are expected in nanoseconds.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let rows = reader
            .deserialize::<TimingRecord>()
            .map(|record| record.map(TimingRow::from))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(PlotError::EmptyTable);
        }

        Ok(Self {
            unit: TimeUnit::Nanoseconds,
            rows,
        })
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn rows(&self) -> &[TimingRow] {
        &self.rows
    }

    /// Converts every duration to milliseconds. A no-op once converted.
    pub fn convert_to_millis(&mut self) {
        if self.unit == TimeUnit::Milliseconds {
            return;
        }
        for row in &mut self.rows {
            for duration in &mut row.durations {
                *duration /= NANOS_PER_MILLI;
            }
        }
        self.unit = TimeUnit::Milliseconds;
    }

    /// Stable sort, rows with equal instance counts keep their file order.
    pub fn sort_by_instances(&mut self) {
        self.rows.sort_by_key(|row| row.num_instances);
    }

    pub fn cumulative(&self) -> CumulativeTable {
        CumulativeTable::new(self.unit, &self.rows)
    }
}
