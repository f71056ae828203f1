pub mod axis;
pub mod figure;
pub mod table;

// Re-exports.
pub use axis::{Axis, LegendPos};
pub use figure::{resize_box, Figure, SubFigure};
pub use table::{Cell, Table};

use crate::db::Series;
use crate::fmt::PlotFmt;

/// pgfplots coordinate list for a single series.
pub fn add_plot(series: &Series) -> String {
    let coordinates: Vec<_> = series
        .points()
        .iter()
        .map(|point| format!("({},{})", point.x, PlotFmt::coordinate(point.y)))
        .collect();
    format!("\\addplot coordinates {{\n{}\n}};", coordinates.join("\n"))
}

pub fn legend(entries: &[&str]) -> String {
    format!("\\legend{{{}}}", entries.join(","))
}
