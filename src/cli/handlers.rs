// src/cli/handlers.rs
use crate::analysis::{self, RunReport};
use crate::catalog::{self, BookSource};
use crate::cli::args::AnalyzeArgs;
use crate::config::Config;
use crate::error::CharnetError;
use crate::exit::CharnetExit;
use crate::graph::{EncounterGraph, GraphBuilder};
use crate::report::{self, console, json, BookDocument};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

/// Handles the list command.
///
/// # Errors
/// Never fails; kept fallible like the other handlers.
pub fn handle_list(config: &Config) -> Result<CharnetExit> {
    console::print_catalog(config);
    Ok(CharnetExit::Success)
}

/// Handles the analyze command.
///
/// # Errors
/// Returns error if a book name is unknown, the directory cannot be walked,
/// or results cannot be written.
pub fn handle_analyze(args: &AnalyzeArgs, config: &Config) -> Result<CharnetExit> {
    let sources = select_sources(args, config)?;
    if sources.is_empty() {
        println!("{} No record files found.", "~".yellow().bold());
        return Ok(CharnetExit::Success);
    }

    let run = if args.fail_fast {
        match analysis::analyze_all_strict(&sources, config) {
            Ok(analyses) => RunReport {
                analyses,
                failures: Vec::new(),
            },
            Err(e) => return Ok(report_fatal(&e)),
        }
    } else {
        analysis::analyze_all(&sources, config)
    };

    let out_dir = &config.paths.output_dir;
    for a in &run.analyses {
        report::write_book(a, out_dir)
            .with_context(|| format!("Failed to write results for {}", a.name()))?;
    }

    if args.json {
        let docs: Vec<BookDocument> = run.analyses.iter().map(BookDocument::new).collect();
        json::print_json(&docs)?;
    } else {
        console::print_run(&run);
    }

    Ok(run_exit(&run))
}

fn select_sources(args: &AnalyzeArgs, config: &Config) -> Result<Vec<BookSource>> {
    if let Some(dir) = &args.dir {
        if !dir.is_dir() {
            bail!("{} is not a directory", dir.display());
        }
        return Ok(catalog::discover(dir, config)?);
    }
    if args.all {
        return Ok(catalog::BOOKS.iter().map(|b| b.to_source(config)).collect());
    }
    if args.books.is_empty() {
        bail!("Name at least one book, or pass --all or --dir");
    }
    args.books
        .iter()
        .map(|name| -> Result<BookSource> { Ok(catalog::find(name)?.to_source(config)) })
        .collect()
}

fn run_exit(run: &RunReport) -> CharnetExit {
    if run.is_clean() {
        CharnetExit::Success
    } else if !run.analyses.is_empty() {
        CharnetExit::PartialFailure
    } else if run.has_record_errors() {
        CharnetExit::InvalidInput
    } else {
        CharnetExit::Error
    }
}

fn report_fatal(e: &CharnetError) -> CharnetExit {
    eprintln!("{} {e}", "X".red().bold());
    if e.is_record_error() {
        CharnetExit::InvalidInput
    } else {
        CharnetExit::Error
    }
}

/// Handles the check command.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn handle_check(file: &Path, config: &Config) -> Result<CharnetExit> {
    let name = file
        .file_stem()
        .map_or_else(|| file.display().to_string(), |s| s.to_string_lossy().into_owned());
    let mut graph = EncounterGraph::new(name);
    let built = GraphBuilder::new()
        .with_comment_marker(config.record.comment_marker)
        .build_file(&mut graph, file);

    match built {
        Ok(g) => {
            console::print_check(g);
            Ok(CharnetExit::Success)
        }
        Err(e) if e.is_record_error() => Ok(report_fatal(&e)),
        Err(e) => Err(e).with_context(|| format!("Failed to check {}", file.display())),
    }
}
