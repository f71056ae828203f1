use super::{Chart, Document, TableSpec};
use crate::db::{LoadTest, Metric, ResultsDB};
use crate::experiment::ServerExperiment::{self, *};
use crate::plot::{Cell, LegendPos};
use color_eyre::Report;

const PULLS: &[ServerExperiment] = &[Pull1, Pull10, Pull100];
const PULLS_LEGEND: &[&str] =
    &["Pull 1 change", "Pull 10 changes", "Pull 100 changes"];
const MUTATIONS: &[ServerExperiment] =
    &[CreateReservation, UpdateReservation, DeleteReservation];
const MUTATIONS_LEGEND: &[&str] =
    &["Create reservation", "Update reservation", "Delete reservation"];

pub const INITIAL_PULL: Chart<ServerExperiment> = Chart {
    experiments: &[InitialPull],
    metric: Metric::Rate,
    legend: &["First time pull"],
    ylabel: "Requests per second",
    xlabel: "Total number of rows sent to client",
    legend_pos: LegendPos::NorthEast,
    caption: "Throughput in requests per second for the first pull of a new client.",
    label: "fig:server-initial-pull",
};

pub const INITIAL_PULL_LATENCY: Chart<ServerExperiment> = Chart {
    experiments: &[InitialPull],
    metric: Metric::Avg,
    legend: &["First time pull"],
    ylabel: "Latency (ms)",
    xlabel: "Total number of rows sent to client",
    legend_pos: LegendPos::NorthWest,
    caption: "Latency in milliseconds for the first pull of a new client.",
    label: "fig:server-initial-pull-latency",
};

pub const PULL_N: Chart<ServerExperiment> = Chart {
    experiments: PULLS,
    metric: Metric::Rate,
    legend: PULLS_LEGEND,
    ylabel: "Requests per second",
    xlabel: "Total number of client rows",
    legend_pos: LegendPos::NorthEast,
    caption: "Throughput for subsequent pulls of clients for N changed rows.",
    label: "fig:server-pull-n",
};

pub const PULL_N_LATENCY: Chart<ServerExperiment> = Chart {
    experiments: PULLS,
    metric: Metric::Avg,
    legend: PULLS_LEGEND,
    ylabel: "Latency (ms)",
    xlabel: "Total number of client rows",
    legend_pos: LegendPos::NorthWest,
    caption: "Latency in milliseconds for subsequent pulls of clients for N changed rows.",
    label: "fig:server-pull-n-latency",
};

pub const PUSH: Chart<ServerExperiment> = Chart {
    experiments: MUTATIONS,
    metric: Metric::Rate,
    legend: MUTATIONS_LEGEND,
    ylabel: "Requests per second",
    xlabel: "Total number of rows",
    legend_pos: LegendPos::SouthWest,
    caption: "Throughput for pushing mutations to the server.",
    label: "fig:server-push",
};

pub const PUSH_LATENCY: Chart<ServerExperiment> = Chart {
    experiments: MUTATIONS,
    metric: Metric::Avg,
    legend: MUTATIONS_LEGEND,
    ylabel: "Latency (ms)",
    xlabel: "Total number of rows",
    legend_pos: LegendPos::NorthWest,
    caption: "Latency in milliseconds for pushing mutations to the server.",
    label: "fig:server-push-latency",
};

pub const REPORT: Document<ServerExperiment> = Document {
    tables: &[
        TableSpec {
            caption: "Throughput in requests per second for server-side operations per number of rows in client state.",
            label: "tab:server-relic-experiment",
            cell: Cell::Rate,
            centering: true,
            adjustbox: false,
        },
        TableSpec {
            caption: "Average latency in milliseconds for server-side operations per number of rows in client state. The 95th percentile of latency is shown in parentheses.",
            label: "tab:server-relic-experiment-latency",
            cell: Cell::AvgP95,
            centering: true,
            adjustbox: true,
        },
    ],
    charts: &[
        INITIAL_PULL,
        INITIAL_PULL_LATENCY,
        PULL_N,
        PULL_N_LATENCY,
        PUSH,
        PUSH_LATENCY,
    ],
    caption: "Throughput of server for handling pull and push requests by total number of rows in client state.",
    label: "fig:server-relic-experiment",
};

pub fn server_report(
    db: &ResultsDB<ServerExperiment, LoadTest>,
) -> Result<String, Report> {
    REPORT.render(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::Experiment;

    #[test]
    fn full_report() {
        let mut entries = Vec::new();
        for (i, row) in ["1000", "10", "100"].iter().enumerate() {
            for experiment in ServerExperiment::ALL {
                let rate = 100.0 * (i + 1) as f64;
                let stat = LoadTest::new(rate, 4.567, 9.1);
                entries.push((*row, *experiment, stat));
            }
        }
        let db = ResultsDB::from_entries(entries).unwrap();
        let report = server_report(&db).unwrap();

        assert_eq!(report.matches("\\begin{table}[H]").count(), 2);
        assert_eq!(report.matches("\\begin{subfigure}").count(), 6);
        assert_eq!(report.matches("\\addplot coordinates").count(), 14);

        // throughput table first, without adjustbox, latency table second
        let throughput =
            report.find("tab:server-relic-experiment}").unwrap();
        let latency =
            report.find("tab:server-relic-experiment-latency").unwrap();
        let adjustbox = report.find("\\begin{adjustbox}").unwrap();
        assert!(throughput < adjustbox && adjustbox < latency);

        // row counts sorted numerically in headers and plots
        assert!(report.contains(concat!(
            "\\textbf{Rows} & \\textbf{10} & \\textbf{100} & ",
            "\\textbf{1000} \\\\",
        )));
        assert!(report.contains(
            "\\textbf{Initial pull} & 200.0 & 300.0 & 100.0 \\\\"
        ));
        assert!(report.contains(concat!(
            "\\textbf{Pull 1 change} & 4.57 (9.1) & 4.57 (9.1) & ",
            "4.57 (9.1) \\\\",
        )));
        assert!(report.contains(
            "\\addplot coordinates {\n(10,200)\n(100,300)\n(1000,100)\n};"
        ));
        // server tables are centered
        assert_eq!(
            report.matches("\\begin{table}[H]\n\\centering\n").count(),
            2
        );
        assert!(report.contains("legend pos=south west,"));
        assert!(report.contains("\\legend{First time pull}"));
    }
}
