use super::{Chart, Document, TableSpec};
use crate::db::{MeanSd, Metric, ResultsDB};
use crate::experiment::ClientExperiment::{self, *};
use crate::plot::{Cell, LegendPos};
use color_eyre::Report;

const ROWS: &str = "Total number of rows";

pub const LOAD_TIMES: Chart<ClientExperiment> = Chart {
    experiments: &[SetupNew, SetupExisting],
    metric: Metric::MeanSeconds,
    legend: &["Initial load", "Subsequent load"],
    ylabel: "Duration (s)",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthWest,
    caption: "Duration in seconds of setting up and loading the data for a new and existing Relic instance by total number of rows.",
    label: "fig:client-load-times",
};

pub const SELECT_N: Chart<ClientExperiment> = Chart {
    experiments: &[SelectLimit1, SelectLimit10, SelectLimit100],
    metric: Metric::Mean,
    legend: &["Select 1 row", "Select 10 rows", "Select 100 rows"],
    ylabel: "Duration (ms)",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthWest,
    caption: "Duration in milliseconds of selecting 1, 10 and 100 rows by total number of rows in the database.",
    label: "fig:client-select-n",
};

pub const SELECT_ADVANCED: Chart<ClientExperiment> = Chart {
    experiments: &[SelectJoin],
    metric: Metric::Mean,
    legend: &["Select 10 joined"],
    ylabel: "Duration (ms)",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthWest,
    caption: "Duration in milliseconds of selecting 10 rows using a join by total number of rows in the database.",
    label: "fig:client-select-advanced",
};

pub const MUTATIONS: Chart<ClientExperiment> = Chart {
    experiments: &[CreateReservation, UpdateReservation, DeleteReservation],
    metric: Metric::Mean,
    legend: &["Create reservation", "Update reservation", "Delete reservation"],
    ylabel: "Duration (ms)",
    xlabel: ROWS,
    legend_pos: LegendPos::NorthWest,
    caption: "Duration in milliseconds to completion of mutations by total number of rows in the database.",
    label: "fig:client-mutations",
};

pub const REPORT: Document<ClientExperiment> = Document {
    tables: &[TableSpec {
        caption: "Duration in milliseconds of client-side operations for databases with different number of rows. (N $\\geq$ 10)",
        label: "tab:client-experiment",
        cell: Cell::MeanSd,
        centering: false,
        adjustbox: true,
    }],
    charts: &[LOAD_TIMES, SELECT_N, SELECT_ADVANCED, MUTATIONS],
    caption: "Latency of various client-side Relic operations for the meeting room scheduler",
    label: "fig:client-experiment",
};

pub fn client_report(
    db: &ResultsDB<ClientExperiment, MeanSd>,
) -> Result<String, Report> {
    REPORT.render(db)
}
