use crate::db::Series;
use crate::plot;
use std::fmt;

/// pgfplots `legend pos` anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPos {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl LegendPos {
    pub fn name(&self) -> &'static str {
        match self {
            LegendPos::NorthWest => "north west",
            LegendPos::NorthEast => "north east",
            LegendPos::SouthWest => "south west",
            LegendPos::SouthEast => "south east",
        }
    }
}

impl fmt::Display for LegendPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A `tikzpicture` with a single log-scaled (on x) axis.
pub struct Axis<'a> {
    ylabel: &'a str,
    xlabel: &'a str,
    legend_pos: LegendPos,
    plots: Vec<String>,
    legend: Vec<&'a str>,
}

impl<'a> Axis<'a> {
    pub fn new(
        ylabel: &'a str,
        xlabel: &'a str,
        legend_pos: LegendPos,
    ) -> Self {
        Self {
            ylabel,
            xlabel,
            legend_pos,
            plots: Vec::new(),
            legend: Vec::new(),
        }
    }

    pub fn plot(&mut self, series: &Series) -> &mut Self {
        self.plots.push(plot::add_plot(series));
        self
    }

    pub fn legend(&mut self, entries: &[&'a str]) -> &mut Self {
        self.legend.extend_from_slice(entries);
        self
    }

    pub fn render(&self) -> String {
        let mut children = self.plots.clone();
        if !self.legend.is_empty() {
            children.push(plot::legend(&self.legend));
        }
        format!(
            "\\begin{{tikzpicture}}
\\begin{{axis}}[
    scaled x ticks=false,
    xticklabel style={{
        /pgf/number format/fixed,
    }},
    enlargelimits=0.05,
    xmode=log,
    legend pos={},
    ylabel={},
    xlabel={},
]
{}
\\end{{axis}}
\\end{{tikzpicture}}
",
            self.legend_pos,
            self.ylabel,
            self.xlabel,
            children.join("\n"),
        )
    }
}
