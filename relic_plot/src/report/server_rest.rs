use super::{Chart, Document, TableSpec};
use crate::db::{LoadTest, Metric, ResultsDB};
use crate::experiment::RestExperiment::{self, *};
use crate::plot::{Cell, LegendPos};
use color_eyre::Report;

const ROWS: &str = "Total number of rows client can access";
const MUTATIONS: &[RestExperiment] =
    &[CreateReservation, UpdateReservation, DeleteReservation];
const MUTATIONS_LEGEND: &[&str] =
    &["Create reservation", "Update reservation", "Delete reservation"];

pub const GET_RESERVATIONS: Chart<RestExperiment> = Chart {
    experiments: &[GetReservations],
    metric: Metric::Rate,
    legend: &["Get reservations"],
    ylabel: "Requests per second",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthEast,
    caption: "Throughput in requests per second for getting reservations.",
    label: "fig:server-rest-get",
};

pub const GET_RESERVATIONS_LATENCY: Chart<RestExperiment> = Chart {
    experiments: &[GetReservations],
    metric: Metric::Avg,
    legend: &["Get reservations"],
    ylabel: "Latency (ms)",
    xlabel: ROWS,
    legend_pos: LegendPos::SouthEast,
    caption: "Average latency in milliseconds for getting reservations.",
    label: "fig:server-rest-get-latency",
};

pub const MUTATIONS_THROUGHPUT: Chart<RestExperiment> = Chart {
    experiments: MUTATIONS,
    metric: Metric::Rate,
    legend: MUTATIONS_LEGEND,
    ylabel: "Requests per second",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthEast,
    caption: "Throughput for creating, updating or deleting reservations.",
    label: "fig:server-rest-mutations",
};

pub const MUTATIONS_LATENCY: Chart<RestExperiment> = Chart {
    experiments: MUTATIONS,
    metric: Metric::Avg,
    legend: MUTATIONS_LEGEND,
    ylabel: "Latency (ms)",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthWest,
    caption: "Average latency in milliseconds for creating, updating or deleting reservations.",
    label: "fig:server-rest-mutations-latency",
};

pub const REPORT: Document<RestExperiment> = Document {
    tables: &[
        TableSpec {
            caption: "Throughput in requests per second for server-side operations per number of rows client may access for the REST server.",
            label: "tab:server-rest-experiment",
            cell: Cell::Rate,
            centering: true,
            adjustbox: false,
        },
        TableSpec {
            caption: "Average latency in milliseconds for server-side operations per number of rows client may access for the REST server. The 95th percentile of latency is shown in parentheses.",
            label: "tab:server-rest-experiment-latency",
            cell: Cell::AvgP95,
            centering: true,
            adjustbox: true,
        },
    ],
    charts: &[
        GET_RESERVATIONS,
        GET_RESERVATIONS_LATENCY,
        MUTATIONS_THROUGHPUT,
        MUTATIONS_LATENCY,
    ],
    caption: "Throughput for serving get, create, update and delete requests by number of rows clients may access for the REST server.",
    label: "fig:server-rest-experiment",
};

pub fn server_rest_report(
    db: &ResultsDB<RestExperiment, LoadTest>,
) -> Result<String, Report> {
    REPORT.render(db)
}
