use color_eyre::Report;
use relic_plot::ReportConfig;

// single document with the results of every row count
const RESULTS_FILE: &str = "./data/client.json";
// generated LaTeX fragment
const OUTPUT_FILE: &str = "./output/client.tex";

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // init logging
    relic_plot::init_tracing();

    let config = ReportConfig::new(RESULTS_FILE, OUTPUT_FILE);
    relic_plot::run_client(&config)
}
