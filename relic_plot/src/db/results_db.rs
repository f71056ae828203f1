use crate::db::{Metric, Point, RowCount, Series, Statistic};
use crate::experiment::Experiment;
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use std::collections::BTreeMap;
use std::fs::DirEntry;
use std::path::Path;
use tracing::{debug, info};

const RESULT_EXTENSION: &str = "json";

/// Benchmark results indexed by row count and then by experiment.
///
/// Row counts iterate in ascending numeric order regardless of the order in
/// which they were found on disk or in the JSON document.
#[derive(Debug, Clone)]
pub struct ResultsDB<E, S> {
    rows: BTreeMap<RowCount, BTreeMap<E, S>>,
}

impl<E, S> ResultsDB<E, S>
where
    E: Experiment,
    S: Statistic,
{
    /// Builds a database from `(row count, experiment, statistic)` entries.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, E, S)>,
    ) -> Result<Self, Report> {
        let mut rows = BTreeMap::new();
        for (row, experiment, stat) in entries {
            let row = RowCount::parse(row)?;
            check_distinct(&rows, &row)?;
            rows.entry(row)
                .or_insert_with(BTreeMap::new)
                .insert(experiment, stat);
        }
        Ok(Self { rows })
    }

    /// Parses a single document of the form
    /// `{ "<row count>": { "<experiment>": <statistic> } }`.
    pub fn from_json_str(json: &str) -> Result<Self, Report> {
        let raw: BTreeMap<String, BTreeMap<String, S>> =
            serde_json::from_str(json).wrap_err("parse results document")?;

        let mut rows = BTreeMap::new();
        for (row, experiments) in raw {
            let row = RowCount::parse(&row)?;
            check_distinct(&rows, &row)?;
            let experiments = experiments
                .into_iter()
                .map(|(key, stat)| -> Result<(E, S), Report> {
                    Ok((E::from_key(&key)?, stat))
                })
                .collect::<Result<BTreeMap<_, _>, Report>>()
                .wrap_err_with(|| format!("load results for {} rows", row))?;
            rows.insert(row, experiments);
        }
        Ok(Self { rows })
    }

    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).wrap_err_with(|| {
            format!("read results file {}", path.display())
        })?;
        let db = Self::from_json_str(&json)
            .wrap_err_with(|| format!("load results file {}", path.display()))?;
        info!("loaded {} row counts from {}", db.len(), path.display());
        Ok(db)
    }

    /// Loads a results tree laid out as `<dir>/<row count>/<experiment>.json`.
    pub fn load_dir(results_dir: impl AsRef<Path>) -> Result<Self, Report> {
        let results_dir = results_dir.as_ref();
        let read_dir = std::fs::read_dir(results_dir).wrap_err_with(|| {
            format!("read results directory {}", results_dir.display())
        })?;

        let mut rows = BTreeMap::new();
        for entry in read_dir {
            let entry = entry.wrap_err("incorrect directory entry")?;
            if !entry.file_type().wrap_err("file type")?.is_dir() {
                debug!("skipping {}", entry.path().display());
                continue;
            }
            let (row, experiments) = Self::load_row(&entry)?;
            check_distinct(&rows, &row).wrap_err_with(|| {
                format!("results directory {}", results_dir.display())
            })?;
            rows.insert(row, experiments);
        }

        let db = Self { rows };
        info!(
            "loaded {} row counts from {}",
            db.len(),
            results_dir.display()
        );
        Ok(db)
    }

    fn load_row(
        row_dir: &DirEntry,
    ) -> Result<(RowCount, BTreeMap<E, S>), Report> {
        let path = row_dir.path();
        let name = row_dir.file_name();
        let row = RowCount::parse(&name.to_string_lossy())
            .wrap_err_with(|| format!("results directory {}", path.display()))?;

        let mut experiments = BTreeMap::new();
        let read_dir = std::fs::read_dir(&path).wrap_err_with(|| {
            format!("read row directory {}", path.display())
        })?;
        for entry in read_dir {
            let entry = entry.wrap_err("incorrect directory entry")?;
            let file = entry.path();
            if file.extension().and_then(|ext| ext.to_str())
                != Some(RESULT_EXTENSION)
            {
                debug!("skipping {}", file.display());
                continue;
            }
            let key = match file.file_stem().and_then(|stem| stem.to_str()) {
                Some(key) => key,
                None => eyre::bail!("invalid result file {}", file.display()),
            };
            let experiment = E::from_key(key)
                .wrap_err_with(|| format!("result file {}", file.display()))?;
            let stat = Self::load_stat(&file)?;
            debug!("loaded {:?} for {} rows", experiment, row);
            experiments.insert(experiment, stat);
        }
        Ok((row, experiments))
    }

    fn load_stat(path: &Path) -> Result<S, Report> {
        // open the file in read-only
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("open result file {}", path.display()))?;
        // create a buf reader
        let buf = std::io::BufReader::new(file);
        // and try to deserialize
        serde_json::from_reader(buf)
            .wrap_err_with(|| format!("deserialize {}", path.display()))
    }

    /// Number of row counts.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_counts(&self) -> impl Iterator<Item = &RowCount> {
        self.rows.keys()
    }

    /// Experiments present in at least one row count, in report order.
    pub fn experiments(&self) -> Vec<E> {
        E::ALL
            .iter()
            .copied()
            .filter(|experiment| {
                self.rows
                    .values()
                    .any(|experiments| experiments.contains_key(experiment))
            })
            .collect()
    }

    pub fn get(&self, row: &RowCount, experiment: E) -> Result<&S, Report> {
        self.rows
            .get(row)
            .and_then(|experiments| experiments.get(&experiment))
            .ok_or_else(|| {
                eyre::eyre!(
                    "no results for experiment {:?} with {} rows",
                    experiment.key(),
                    row
                )
            })
    }

    /// Extracts `metric` of `experiment` for every row count.
    pub fn series(
        &self,
        experiment: E,
        metric: Metric,
    ) -> Result<Series, Report> {
        let points = self
            .rows
            .keys()
            .map(|row| {
                let stat = self.get(row, experiment)?;
                let y = stat.metric(metric)?;
                Ok(Point { x: row.value(), y })
            })
            .collect::<Result<Vec<_>, Report>>()?;
        Ok(Series::new(points))
    }
}

// Labels such as "10" and "010" parse to the same row count and would put
// two points on the same x.
fn check_distinct<V>(
    rows: &BTreeMap<RowCount, V>,
    row: &RowCount,
) -> Result<(), Report> {
    let same_value = rows.keys().find(|other| {
        other.value() == row.value() && other.label() != row.label()
    });
    match same_value {
        Some(other) => eyre::bail!(
            "row counts {:?} and {:?} both stand for {} rows",
            other.label(),
            row.label(),
            row.value()
        ),
        None => Ok(()),
    }
}
