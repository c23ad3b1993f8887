// src/report/json.rs
//! JSON artifacts written per book.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{BookAnalysis, GlobalReport};
use crate::catalog::Genre;
use crate::error::{CharnetError, Result};
use crate::fit::FitResult;
use crate::graph::{EdgeExport, VertexExport};
use crate::metrics::{DisconnectedGraphWarning, MetricExport};

/// Whole-book figures plus the graph itself, as written to `<book>-global.json`.
#[derive(Debug, Serialize)]
pub struct GlobalDocument<'a> {
    pub book: &'a str,
    pub genre: Option<Genre>,
    pub color: Option<&'a str>,
    #[serde(flatten)]
    pub global: &'a GlobalReport,
    pub disconnected: Option<&'a DisconnectedGraphWarning>,
    pub vertex_list: Vec<VertexExport>,
    pub edge_list: Vec<EdgeExport>,
}

/// Everything about one book in a single document, for `--json`.
#[derive(Debug, Serialize)]
pub struct BookDocument<'a> {
    #[serde(flatten)]
    pub global: GlobalDocument<'a>,
    pub metrics: BTreeMap<String, MetricExport>,
    pub fit: Option<&'a FitResult>,
}

impl<'a> GlobalDocument<'a> {
    #[must_use]
    pub fn new(analysis: &'a BookAnalysis) -> Self {
        Self {
            book: analysis.name(),
            genre: analysis.source.genre,
            color: analysis.source.color.as_deref(),
            global: &analysis.global,
            disconnected: analysis.metrics.disconnected(),
            vertex_list: analysis.graph.vertex_listing(),
            edge_list: analysis.graph.edge_listing(),
        }
    }
}

impl<'a> BookDocument<'a> {
    #[must_use]
    pub fn new(analysis: &'a BookAnalysis) -> Self {
        Self {
            global: GlobalDocument::new(analysis),
            metrics: analysis.metrics.export(&analysis.graph),
            fit: analysis.fit(),
        }
    }
}

/// Writes `<book>-metrics.json`, `<book>-fit.json` and `<book>-global.json`.
///
/// The fit file is left out when the degrees could not be fitted.
/// Returns the paths written.
///
/// # Errors
/// Returns `Io` if the directory or a file cannot be written.
pub fn write_book(analysis: &BookAnalysis, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| CharnetError::Io {
        source,
        path: out_dir.to_path_buf(),
    })?;

    let book = analysis.name();
    let mut written = Vec::with_capacity(3);

    let metrics = analysis.metrics.export(&analysis.graph);
    written.push(write_json(&out_dir.join(format!("{book}-metrics.json")), &metrics)?);

    if let Some(fit) = analysis.fit() {
        written.push(write_json(&out_dir.join(format!("{book}-fit.json")), fit)?);
    } else {
        debug!(book, "no fit to write");
    }

    let global = GlobalDocument::new(analysis);
    written.push(write_json(&out_dir.join(format!("{book}-global.json")), &global)?);

    info!(book, files = written.len(), dir = %out_dir.display(), "wrote results");
    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| CharnetError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(path.to_path_buf())
}

/// Serializes a value to pretty JSON on stdout.
///
/// # Errors
/// Returns `Json` if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
