// src/graph/builder.rs
//! Graph construction: validates parsed records and populates the graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::encounter::EncounterGraph;
use crate::error::{CharnetError, Result};
use crate::record::parser;
use crate::record::{ChapterRecord, Record, VertexRecord, DEFAULT_COMMENT_MARKER};

/// Reads a book record into an [`EncounterGraph`].
///
/// Building is all-or-nothing: records go into a staging graph that replaces
/// the target only when the whole record is valid. A graph that is already
/// built is returned untouched, without reading anything.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    comment_marker: char,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
        }
    }
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Builds from an already parsed record stream.
    ///
    /// # Errors
    /// Returns the first parse or validation error; `graph` is left unbuilt.
    pub fn build_from<'g, I>(&self, graph: &'g mut EncounterGraph, records: I) -> Result<&'g EncounterGraph>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        if graph.is_built() {
            debug!(book = graph.name(), "graph already built, skipping");
            return Ok(graph);
        }

        let mut staging = Staging::new(graph.name());
        for record in records {
            match record? {
                Record::Vertex(v) => staging.declare(&v)?,
                Record::Chapter(ch) => staging.encounter(&ch)?,
            }
        }

        let mut built = staging.graph;
        built.mark_built();
        info!(
            book = built.name(),
            vertices = built.vertex_count(),
            edges = built.edge_count(),
            "read graph from book"
        );
        *graph = built;
        Ok(graph)
    }

    /// Builds from an in-memory record.
    ///
    /// # Errors
    /// See [`GraphBuilder::build_from`].
    pub fn build_str<'g>(&self, graph: &'g mut EncounterGraph, text: &str) -> Result<&'g EncounterGraph> {
        if graph.is_built() {
            return Ok(graph);
        }
        let records = parser::from_str(graph.name(), text).with_comment_marker(self.comment_marker);
        self.build_from(graph, records)
    }

    /// Builds from a buffered reader.
    ///
    /// # Errors
    /// See [`GraphBuilder::build_from`]; read failures surface as `Io`.
    pub fn build_reader<'g, R: BufRead>(
        &self,
        graph: &'g mut EncounterGraph,
        reader: R,
    ) -> Result<&'g EncounterGraph> {
        if graph.is_built() {
            return Ok(graph);
        }
        let records = parser::from_reader(graph.name(), reader).with_comment_marker(self.comment_marker);
        self.build_from(graph, records)
    }

    /// Builds from a record file. The file is not opened if `graph` is built.
    ///
    /// # Errors
    /// Returns `Io` (with the path) if the file cannot be read.
    pub fn build_file<'g>(&self, graph: &'g mut EncounterGraph, path: &Path) -> Result<&'g EncounterGraph> {
        if graph.is_built() {
            return Ok(graph);
        }
        let file = File::open(path).map_err(|source| CharnetError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        self.build_reader(graph, BufReader::new(file))
            .map_err(|e| attach_path(e, path))
    }
}

fn attach_path(err: CharnetError, path: &Path) -> CharnetError {
    match err {
        CharnetError::Io { source, .. } => CharnetError::Io {
            source,
            path: path.to_path_buf(),
        },
        other => other,
    }
}

struct Staging {
    graph: EncounterGraph,
    previous: Option<String>,
}

impl Staging {
    fn new(book: &str) -> Self {
        Self {
            graph: EncounterGraph::new(book),
            previous: None,
        }
    }

    fn declare(&mut self, v: &VertexRecord) -> Result<()> {
        let book = self.graph.name().to_string();

        if let Some(prev) = &self.previous {
            if v.label < *prev {
                return Err(CharnetError::OutOfOrderLabel {
                    book,
                    line: v.line,
                    previous: prev.clone(),
                    label: v.label.clone(),
                });
            }
        }
        if self.graph.add_vertex(&v.label, &v.name).is_none() {
            return Err(CharnetError::DuplicateLabel {
                book,
                line: v.line,
                label: v.label.clone(),
            });
        }

        debug!(book = %book, label = %v.label, name = %v.name, "add vertex");
        self.previous = Some(v.label.clone());
        Ok(())
    }

    fn encounter(&mut self, ch: &ChapterRecord) -> Result<()> {
        for group in &ch.groups {
            let members = self.resolve(ch.line, group)?;
            self.apply_group(&members);
        }
        Ok(())
    }

    /// Resolves every label of a group before anything is mutated.
    fn resolve(&self, line: usize, group: &[String]) -> Result<Vec<usize>> {
        group
            .iter()
            .map(|label| {
                self.graph
                    .index_of(label)
                    .ok_or_else(|| CharnetError::UnknownLabel {
                        book: self.graph.name().to_string(),
                        line,
                        label: label.clone(),
                    })
            })
            .collect()
    }

    fn apply_group(&mut self, members: &[usize]) {
        for &idx in members {
            self.graph.inc_frequency(idx);
        }
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                let weight = self.graph.add_encounter(u, v);
                debug!(
                    book = self.graph.name(),
                    u = self.graph.label_of(u).unwrap_or_default(),
                    v = self.graph.label_of(v).unwrap_or_default(),
                    weight,
                    action = if weight > 1 { "mod" } else { "add" },
                    "edge"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
* sample book
AA alice
AB bob
AC carol

1:AA,AB;AB,AC
";

    #[test]
    fn test_end_to_end_example() -> Result<()> {
        let mut g = EncounterGraph::new("sample");
        GraphBuilder::new().build_str(&mut g, SAMPLE)?;

        assert!(g.is_built());
        assert_eq!(g.weight_between("AA", "AB"), Some(1));
        assert_eq!(g.weight_between("AB", "AC"), Some(1));
        assert_eq!(g.weight_between("AA", "AC"), None);
        let freqs: Vec<u32> = g.vertices().iter().map(|v| v.frequency).collect();
        assert_eq!(freqs, vec![1, 2, 1]);
        assert_eq!(g.degree_sequence(), vec![1, 2, 1]);
        Ok(())
    }

    #[test]
    fn test_out_of_order_leaves_graph_empty() {
        let mut g = EncounterGraph::new("bad");
        let err = GraphBuilder::new().build_str(&mut g, "AA alice\nAC carol\nAB bob\n");
        assert!(matches!(
            err,
            Err(CharnetError::OutOfOrderLabel { ref previous, ref label, line: 3, .. })
                if previous == "AC" && label == "AB"
        ));
        assert!(!g.is_built());
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn test_tie_is_duplicate() {
        let mut g = EncounterGraph::new("dup");
        let err = GraphBuilder::new().build_str(&mut g, "AA alice\nAA alice again\n");
        assert!(matches!(err, Err(CharnetError::DuplicateLabel { line: 2, .. })));
    }

    #[test]
    fn test_unknown_label_adds_nothing() {
        let mut g = EncounterGraph::new("unk");
        let err = GraphBuilder::new().build_str(&mut g, "AA alice\nAB bob\n\n1:AA,AB\n2:AA,ZZ\n");
        assert!(matches!(
            err,
            Err(CharnetError::UnknownLabel { ref label, line: 5, .. }) if label == "ZZ"
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_rebuild_is_noop() -> Result<()> {
        let mut g = EncounterGraph::new("sample");
        let builder = GraphBuilder::new();
        builder.build_str(&mut g, SAMPLE)?;
        let first = g.clone();
        builder.build_str(&mut g, "ZZ zed\n")?;
        assert_eq!(g, first);
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let mut g = EncounterGraph::new("ghost");
        let path = Path::new("/nonexistent/ghost.dat");
        let err = GraphBuilder::new().build_file(&mut g, path);
        assert!(matches!(err, Err(CharnetError::Io { path: ref p, .. }) if p == path));
    }
}
