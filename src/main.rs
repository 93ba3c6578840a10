use clap::Parser;

use team_picker::config::Config;

fn main() {
    let config = Config::parse();
    team_picker::logging::init(config.verbose);

    if let Err(e) = team_picker::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
