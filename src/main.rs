use clap::Parser;

mod cli;
mod commands;
mod domain;
mod lighthouse;
mod services;

use cli::{Cli, Commands};
use services::config::{load_config, Settings};

fn main() {
    services::logging::init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::CheckHtml { path } = &cli.command {
        return commands::handle_check_html(cli.json, path);
    }
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(config, cli.report.clone());
    let report = lighthouse::load_report(&settings.report_path)?;
    commands::handle_report_commands(cli, &settings, &report)
}
