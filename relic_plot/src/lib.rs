#![deny(rust_2018_idioms)]

mod config;
pub mod db;
pub mod experiment;
mod fmt;
pub mod plot;
pub mod report;

// Re-exports.
pub use config::ReportConfig;
pub use db::ResultsDB;
pub use report::client::client_report;
pub use report::server::server_report;
pub use report::server_rest::server_rest_report;

use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use db::{LoadTest, MeanSd};
use experiment::{ClientExperiment, RestExperiment, ServerExperiment};
use std::path::Path;
use tracing::info;

/// Logs go to stderr: stdout carries the generated document.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run_client(config: &ReportConfig) -> Result<(), Report> {
    let db: ResultsDB<ClientExperiment, MeanSd> =
        ResultsDB::load_file(config.input()).wrap_err("load client results")?;
    let document = client_report(&db).wrap_err("render client report")?;
    emit(&document, config.output())
}

pub fn run_server(config: &ReportConfig) -> Result<(), Report> {
    let db: ResultsDB<ServerExperiment, LoadTest> =
        ResultsDB::load_dir(config.input()).wrap_err("load server results")?;
    let document = server_report(&db).wrap_err("render server report")?;
    emit(&document, config.output())
}

pub fn run_server_rest(config: &ReportConfig) -> Result<(), Report> {
    let db: ResultsDB<RestExperiment, LoadTest> =
        ResultsDB::load_dir(config.input())
            .wrap_err("load REST server results")?;
    let document =
        server_rest_report(&db).wrap_err("render REST server report")?;
    emit(&document, config.output())
}

// Prints and then writes a fully rendered document.
fn emit(document: &str, output: &Path) -> Result<(), Report> {
    println!("{}", document);
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir).wrap_err_with(|| {
            format!("create output directory {}", dir.display())
        })?;
    }
    std::fs::write(output, document)
        .wrap_err_with(|| format!("write report {}", output.display()))?;
    info!("report written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::Experiment;

    fn write_server_results(dir: &Path, rows: &[&str]) {
        for (i, row) in rows.iter().enumerate() {
            let row_dir = dir.join(row);
            std::fs::create_dir_all(&row_dir).unwrap();
            for experiment in ServerExperiment::ALL {
                let rate = 10.0 * (i + 1) as f64;
                let stat = LoadTest::new(rate, 3.333, 7.777);
                let file =
                    row_dir.join(format!("{}.json", experiment.key()));
                std::fs::write(file, serde_json::to_string(&stat).unwrap())
                    .unwrap();
            }
        }
    }

    #[test]
    fn client_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("client.json");
        let mut rows = serde_json::Map::new();
        for row in ["10", "100"] {
            let experiments: serde_json::Map<_, _> = ClientExperiment::ALL
                .iter()
                .map(|experiment| {
                    let stat = MeanSd::new(5.001, 0.2);
                    (
                        experiment.key().to_string(),
                        serde_json::to_value(stat).unwrap(),
                    )
                })
                .collect();
            rows.insert(row.to_string(), experiments.into());
        }
        std::fs::write(&input, serde_json::Value::from(rows).to_string())
            .unwrap();

        let output = dir.path().join("output").join("client.tex");
        let config = ReportConfig::new(&input, &output);
        run_client(&config).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains(
            "\\textbf{Select 1 rows} & 5.0 $\\pm$ 0.2 & 5.0 $\\pm$ 0.2 \\\\"
        ));
        assert!(written.contains("(10,5.001)\n(100,5.001)\n};"));
    }

    #[test]
    fn server_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results");
        write_server_results(&input, &["100", "10", "1000"]);
        let output = dir.path().join("server.tex");
        let config = ReportConfig::new(&input, &output);

        run_server(&config).unwrap();
        let first = std::fs::read(&output).unwrap();
        run_server(&config).unwrap();
        let second = std::fs::read(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_experiment_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results");
        write_server_results(&input, &["10"]);
        std::fs::write(
            input.join("10").join("pull everything.json"),
            serde_json::to_string(&LoadTest::new(1.0, 1.0, 1.0)).unwrap(),
        )
        .unwrap();

        let output = dir.path().join("server.tex");
        let config = ReportConfig::new(&input, &output);
        let err = run_server(&config).unwrap_err();
        assert!(format!("{:?}", err)
            .contains("unknown experiment: pull everything"));
        assert!(!output.exists());
    }

    #[test]
    fn incomplete_results_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results-rest");
        let row_dir = input.join("10");
        std::fs::create_dir_all(&row_dir).unwrap();
        std::fs::write(
            row_dir.join("reservations.json"),
            serde_json::to_string(&LoadTest::new(1.0, 1.0, 1.0)).unwrap(),
        )
        .unwrap();

        let output = dir.path().join("server-rest.tex");
        let config = ReportConfig::new(&input, &output);
        assert!(run_server_rest(&config).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("client.tex");
        let input = dir.path().join("client.json");
        let config = ReportConfig::new(input, &output);
        assert!(run_client(&config).is_err());
        assert!(!output.exists());
    }
}
