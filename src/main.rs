use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::errors::*;
pub use domain::models::*;
pub use services::config::*;
pub use services::content_scan::*;
pub use services::output::*;
pub use services::report::*;
pub use services::size_guard::*;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        None | Some(Commands::Check) => {
            let config = load_config(&cli.root, cli.config.as_deref())?;
            handle_check(cli, &config)
        }
        Some(Commands::Content { command }) => {
            handle_content_commands(cli, command)?;
            Ok(true)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            print_error(cli.json, error_code(&err), &err.to_string());
            std::process::exit(1);
        }
    }
}
