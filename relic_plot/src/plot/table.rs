use crate::db::{Metric, ResultsDB, Statistic};
use crate::experiment::Experiment;
use crate::fmt::PlotFmt;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;

/// How a statistic is shown in a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `mean $\pm$ sd`
    MeanSd,
    /// requests per second
    Rate,
    /// `avg (p95)`
    AvgP95,
}

impl Cell {
    pub fn render<S: Statistic>(&self, stat: &S) -> Result<String, Report> {
        let cell = match self {
            Cell::MeanSd => format!(
                "{} $\\pm$ {}",
                PlotFmt::round(stat.metric(Metric::Mean)?),
                PlotFmt::round(stat.metric(Metric::Sd)?)
            ),
            Cell::Rate => PlotFmt::round(stat.metric(Metric::Rate)?),
            Cell::AvgP95 => format!(
                "{} ({})",
                PlotFmt::round(stat.metric(Metric::Avg)?),
                PlotFmt::round(stat.metric(Metric::P95)?)
            ),
        };
        Ok(cell)
    }
}

/// A `tabular` with one column per row count and one line per experiment.
pub struct Table<'a> {
    caption: &'a str,
    label: &'a str,
    cell: Cell,
    centering: bool,
    adjustbox: bool,
}

impl<'a> Table<'a> {
    pub fn new(caption: &'a str, label: &'a str, cell: Cell) -> Self {
        Self {
            caption,
            label,
            cell,
            centering: false,
            adjustbox: false,
        }
    }

    /// Emits `\centering` at the top of the float.
    pub fn centering(mut self, centering: bool) -> Self {
        self.centering = centering;
        self
    }

    /// Shrinks the table to the text width.
    pub fn adjustbox(mut self, adjustbox: bool) -> Self {
        self.adjustbox = adjustbox;
        self
    }

    pub fn render<E, S>(&self, db: &ResultsDB<E, S>) -> Result<String, Report>
    where
        E: Experiment,
        S: Statistic,
    {
        let tabular = self.tabular(db)?;
        let tabular = if self.adjustbox {
            format!(
                "\\begin{{adjustbox}}{{width=\\textwidth}}\n{}\n\
                 \\end{{adjustbox}}",
                tabular
            )
        } else {
            tabular
        };
        let centering = if self.centering { "\\centering\n" } else { "" };
        Ok(format!(
            "\\begin{{table}}[H]
{}{}
\\caption{{{}}}
\\label{{{}}}
\\end{{table}}
",
            centering, tabular, self.caption, self.label
        ))
    }

    fn tabular<E, S>(&self, db: &ResultsDB<E, S>) -> Result<String, Report>
    where
        E: Experiment,
        S: Statistic,
    {
        let columns = "l".repeat(db.len() + 1);

        let mut header = vec!["\\textbf{Rows}".to_string()];
        header.extend(
            db.row_counts().map(|row| format!("\\textbf{{{}}}", row)),
        );

        let mut lines = vec![format!("{} \\\\", header.join(" & "))];
        for experiment in db.experiments() {
            let mut line = vec![format!("\\textbf{{{}}}", experiment.label())];
            for row in db.row_counts() {
                let cell = db
                    .get(row, experiment)
                    .and_then(|stat| self.cell.render(stat))
                    .wrap_err_with(|| format!("table {}", self.label))?;
                line.push(cell);
            }
            lines.push(format!("{} \\\\", line.join(" & ")));
        }

        Ok(format!(
            "\\begin{{tabular}}{{{}}}\n{}\n\\end{{tabular}}",
            columns,
            lines.join("\n")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{LoadTest, MeanSd};
    use crate::experiment::{ClientExperiment, ServerExperiment};

    fn body(rendered: &str) -> Vec<&str> {
        // lines between the header and the end of the tabular
        rendered
            .lines()
            .skip_while(|line| !line.starts_with("\\textbf{Rows}"))
            .skip(1)
            .take_while(|line| *line != "\\end{tabular}")
            .collect()
    }

    #[test]
    fn mean_sd_cell() {
        let cell = Cell::MeanSd.render(&MeanSd::new(12.345, 0.1)).unwrap();
        assert_eq!(cell, "12.35 $\\pm$ 0.1");
        let cell = Cell::MeanSd.render(&MeanSd::new(12.125, 0.125)).unwrap();
        assert_eq!(cell, "12.13 $\\pm$ 0.13");
        assert!(Cell::Rate.render(&MeanSd::new(1.0, 0.0)).is_err());
    }

    #[test]
    fn load_test_cells() {
        let stat = LoadTest::new(150.374, 6.6109, 12.0);
        assert_eq!(Cell::Rate.render(&stat).unwrap(), "150.37");
        assert_eq!(Cell::AvgP95.render(&stat).unwrap(), "6.61 (12.0)");
    }

    #[test]
    fn single_row_table() {
        let db = ResultsDB::from_entries(vec![(
            "10",
            ClientExperiment::SelectLimit1,
            MeanSd::new(5.001, 0.2),
        )])
        .unwrap();
        let rendered = Table::new("Caption.", "tab:test", Cell::MeanSd)
            .adjustbox(true)
            .render(&db)
            .unwrap();
        assert!(rendered.starts_with(
            "\\begin{table}[H]\n\\begin{adjustbox}{width=\\textwidth}\n"
        ));
        assert!(rendered.contains("\\begin{tabular}{ll}\n"));
        assert!(rendered.contains("\\textbf{Rows} & \\textbf{10} \\\\\n"));
        assert_eq!(
            body(&rendered),
            vec!["\\textbf{Select 1 rows} & 5.0 $\\pm$ 0.2 \\\\"]
        );
        assert!(
            rendered.contains("\\caption{Caption.}\n\\label{tab:test}\n")
        );
    }

    #[test]
    fn centering_toggle() {
        let db = ResultsDB::from_entries(vec![(
            "10",
            ServerExperiment::InitialPull,
            LoadTest::new(100.0, 2.5, 4.25),
        )])
        .unwrap();
        let table = Table::new("Throughput.", "tab:throughput", Cell::Rate);

        let rendered = table.centering(false).render(&db).unwrap();
        assert!(!rendered.contains("\\centering"));
        assert!(rendered
            .starts_with("\\begin{table}[H]\n\\begin{tabular}{ll}\n"));

        let table = Table::new("Throughput.", "tab:throughput", Cell::Rate);
        let rendered = table.centering(true).render(&db).unwrap();
        assert!(rendered.starts_with(
            "\\begin{table}[H]\n\\centering\n\\begin{tabular}{ll}\n"
        ));
    }

    #[test]
    fn table_shape() {
        let rows = ["10", "100", "1000", "10000"];
        let experiments = [
            ServerExperiment::DeleteReservation,
            ServerExperiment::InitialPull,
            ServerExperiment::Pull10,
        ];
        let entries = rows.iter().flat_map(|row| {
            experiments
                .iter()
                .map(move |e| (*row, *e, LoadTest::new(100.0, 2.5, 4.25)))
        });
        let db = ResultsDB::from_entries(entries).unwrap();

        let rendered = Table::new("Latency.", "tab:latency", Cell::AvgP95)
            .centering(true)
            .render(&db)
            .unwrap();
        assert!(!rendered.contains("adjustbox"));
        assert!(rendered.starts_with(
            "\\begin{table}[H]\n\\centering\n\\begin{tabular}{lllll}\n"
        ));
        assert!(rendered.contains("\\begin{tabular}{lllll}\n"));

        let body = body(&rendered);
        assert_eq!(body.len(), experiments.len());
        for line in &body {
            assert_eq!(line.split(" & ").count(), rows.len() + 1);
            assert!(line.ends_with(" \\\\"));
        }
        // enumeration order, not insertion order
        assert!(body[0].starts_with("\\textbf{Initial pull} & 2.5 (4.25)"));
        assert!(body[1].starts_with("\\textbf{Pull 10 changes} & "));
        assert!(body[2].starts_with("\\textbf{Delete reservation} & "));
    }

    #[test]
    fn missing_cell() {
        let stat = LoadTest::new(1.0, 1.0, 1.0);
        let db = ResultsDB::from_entries(vec![
            ("10", ServerExperiment::InitialPull, stat),
            ("100", ServerExperiment::Pull1, stat),
        ])
        .unwrap();
        let result = Table::new("Throughput.", "tab:throughput", Cell::Rate)
            .render(&db);
        assert!(result.is_err());
    }
}
