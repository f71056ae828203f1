mod results_db;
mod stats;

// Re-exports.
pub use results_db::ResultsDB;
pub use stats::{LoadTest, MeanSd, Metric, Statistic};

use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use std::fmt;

/// Total number of database rows in a benchmark run.
///
/// Ordering is numeric (`"9" < "10"`); the original label is kept so that
/// tables print it back as found in the results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowCount {
    // field order matters: compare by value first
    value: u64,
    label: String,
}

impl RowCount {
    pub fn parse(label: &str) -> Result<Self, Report> {
        let value = label
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid row count {:?}", label))?;
        Ok(Self {
            value,
            label: label.to_string(),
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: u64,
    pub y: f64,
}

/// One experiment's metric across all row counts, in row count order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
