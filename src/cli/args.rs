use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "charnet", version, about = "Character encounter networks of books")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Configuration file (default: ./charnet.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Directory for JSON results, overriding the config
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
    /// More logging; repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the books in the catalog
    List,
    /// Build graphs, compute measures and write results
    Analyze {
        /// Catalog books to analyze
        #[arg(value_name = "BOOK")]
        books: Vec<String>,
        /// Analyze every catalog book
        #[arg(long, conflicts_with_all = ["books", "dir"])]
        all: bool,
        /// Analyze every record file under a directory
        #[arg(long, value_name = "DIR", conflicts_with = "books")]
        dir: Option<PathBuf>,
        /// Stop at the first book that fails
        #[arg(long)]
        fail_fast: bool,
        /// Print results as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Parse and build one record file
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Arguments for the analyze command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct AnalyzeArgs {
    pub books: Vec<String>,
    pub all: bool,
    pub dir: Option<PathBuf>,
    pub fail_fast: bool,
    pub json: bool,
}
