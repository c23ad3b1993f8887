use charnet_core::cli::{self, Cli};
use charnet_core::exit::CharnetExit;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() -> CharnetExit {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli::log_filter(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = cli::load_config(&cli).and_then(|config| match cli.command {
        Some(cmd) => cli::dispatch::execute(cmd, &config),
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            Ok(CharnetExit::Success)
        }
    });

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            CharnetExit::Error
        }
    }
}
