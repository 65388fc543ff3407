// nl-search: send one query and print the report
use clap::Parser;

use nl_search_runner::{logging, run_nl_search, RunnerConfig};

fn main() {
    let config = RunnerConfig::parse();
    logging::init_logging();

    let stdout = std::io::stdout();
    if let Err(e) = run_nl_search(&config, &mut stdout.lock()) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
