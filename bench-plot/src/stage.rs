use std::fmt;

pub const STAGE_COUNT: usize = 6;

/// A compute kernel of the splatting pipeline.
///
/// Variants are declared in execution order. Cumulative sums and chart
/// layering follow [`Stage::PIPELINE`], never the column order of a csv file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Preprocess,
    PrefixSum,
    PreprocessSort,
    Sort,
    TileBoundary,
    Render,
}

impl Stage {
    pub const PIPELINE: [Stage; STAGE_COUNT] = [
        Stage::Preprocess,
        Stage::PrefixSum,
        Stage::PreprocessSort,
        Stage::Sort,
        Stage::TileBoundary,
        Stage::Render,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name in the viewer's csv output.
    pub fn column(self) -> &'static str {
        match self {
            Stage::Preprocess => "preprocess",
            Stage::PrefixSum => "prefix_sum",
            Stage::PreprocessSort => "preprocess_sort",
            Stage::Sort => "sort",
            Stage::TileBoundary => "tile_boundary",
            Stage::Render => "render",
        }
    }

    pub fn cumulative_column(self) -> String {
        format!("{}_cumulative", self.column())
    }

    pub fn from_column(name: &str) -> Option<Stage> {
        Stage::PIPELINE.into_iter().find(|stage| stage.column() == name)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn test_pipeline_order_matches_index() {
        for (i, stage) in Stage::PIPELINE.into_iter().enumerate() {
            assert_eq!(stage.index(), i);
            assert_eq!(Stage::from_column(stage.column()), Some(stage));
        }
        assert_eq!(Stage::TileBoundary.cumulative_column(), "tile_boundary_cumulative");
        assert_eq!(Stage::from_column("num_instances"), None);
    }
}
