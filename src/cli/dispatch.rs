//! Command dispatch logic extracted from the binary.

use super::{
    args::{AnalyzeArgs, Commands},
    handlers::{handle_analyze, handle_check, handle_list},
};
use crate::config::Config;
use crate::exit::CharnetExit;
use anyhow::Result;

/// Executes the parsed command against an already loaded config.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: &Config) -> Result<CharnetExit> {
    match command {
        Commands::List => handle_list(config),
        Commands::Analyze {
            books,
            all,
            dir,
            fail_fast,
            json,
        } => {
            let args = AnalyzeArgs {
                books,
                all,
                dir,
                fail_fast,
                json,
            };
            handle_analyze(&args, config)
        }
        Commands::Check { file } => handle_check(&file, config),
    }
}
