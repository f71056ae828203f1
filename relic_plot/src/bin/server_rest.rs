use color_eyre::Report;
use relic_plot::ReportConfig;

// same layout as the server results
const RESULTS_DIR: &str = "./data/results-rest";
// generated LaTeX fragment
const OUTPUT_FILE: &str = "./output/server-rest.tex";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    relic_plot::init_tracing();

    let config = ReportConfig::new(RESULTS_DIR, OUTPUT_FILE);
    relic_plot::run_server_rest(&config)
}
