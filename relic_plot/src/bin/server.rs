use color_eyre::Report;
use relic_plot::ReportConfig;

// one folder per row count, one file per experiment
const RESULTS_DIR: &str = "./data/results";
// generated LaTeX fragment
const OUTPUT_FILE: &str = "./output/server.tex";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    relic_plot::init_tracing();

    let config = ReportConfig::new(RESULTS_DIR, OUTPUT_FILE);
    relic_plot::run_server(&config)
}
