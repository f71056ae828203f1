pub mod client;
pub mod server;
pub mod server_rest;

use crate::db::{Metric, ResultsDB, Statistic};
use crate::experiment::Experiment;
use crate::plot::{resize_box, Axis, Cell, Figure, LegendPos, SubFigure, Table};
use color_eyre::eyre::WrapErr;
use color_eyre::Report;

/// A sub-figure plotting one metric of a few experiments.
pub struct Chart<E: 'static> {
    pub experiments: &'static [E],
    pub metric: Metric,
    /// one entry per experiment
    pub legend: &'static [&'static str],
    pub ylabel: &'static str,
    pub xlabel: &'static str,
    pub legend_pos: LegendPos,
    pub caption: &'static str,
    pub label: &'static str,
}

impl<E: Experiment> Chart<E> {
    pub fn render<S: Statistic>(
        &self,
        db: &ResultsDB<E, S>,
    ) -> Result<String, Report> {
        let mut axis = Axis::new(self.ylabel, self.xlabel, self.legend_pos);
        for experiment in self.experiments {
            let series = db
                .series(*experiment, self.metric)
                .wrap_err_with(|| format!("figure {}", self.label))?;
            axis.plot(&series);
        }
        axis.legend(self.legend);
        let picture = resize_box(&axis.render());
        Ok(SubFigure::new(self.caption, self.label).render(&picture))
    }
}

pub struct TableSpec {
    pub caption: &'static str,
    pub label: &'static str,
    pub cell: Cell,
    pub centering: bool,
    pub adjustbox: bool,
}

impl TableSpec {
    pub fn render<E, S>(&self, db: &ResultsDB<E, S>) -> Result<String, Report>
    where
        E: Experiment,
        S: Statistic,
    {
        Table::new(self.caption, self.label, self.cell)
            .centering(self.centering)
            .adjustbox(self.adjustbox)
            .render(db)
    }
}

/// Tables followed by a single figure holding every chart.
pub struct Document<E: 'static> {
    pub tables: &'static [TableSpec],
    pub charts: &'static [Chart<E>],
    pub caption: &'static str,
    pub label: &'static str,
}

impl<E: Experiment> Document<E> {
    pub fn render<S: Statistic>(
        &self,
        db: &ResultsDB<E, S>,
    ) -> Result<String, Report> {
        let tables = self
            .tables
            .iter()
            .map(|table| table.render(db))
            .collect::<Result<Vec<_>, Report>>()?;
        let charts = self
            .charts
            .iter()
            .map(|chart| chart.render(db))
            .collect::<Result<Vec<_>, Report>>()?;
        let figure = Figure::new(self.caption, self.label).render(&charts);
        Ok(format!("\n{}\n{}\n", tables.join("\n"), figure))
    }
}
