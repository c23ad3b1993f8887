// src/metrics/table.rs
use std::collections::BTreeMap;

use serde::Serialize;

use super::DisconnectedGraphWarning;
use crate::graph::EncounterGraph;

/// Measures of one vertex, raw and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRow {
    pub degree: usize,
    pub betweenness: f64,
    pub closeness: f64,
    pub lobby: usize,
    pub degree_norm: f64,
    pub betweenness_norm: f64,
    pub closeness_norm: f64,
    pub lobby_norm: f64,
}

/// Per-vertex measures of one graph, indexed like the graph's vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    book: String,
    rows: Vec<MetricRow>,
    disconnected: Option<DisconnectedGraphWarning>,
}

/// A row joined with the character it describes, for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricExport {
    pub name: String,
    pub frequency: u32,
    #[serde(flatten)]
    pub metrics: MetricRow,
}

/// Mean and standard deviation of each normalized measure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CentralityStats {
    pub degree: (f64, f64),
    pub betweenness: (f64, f64),
    pub closeness: (f64, f64),
    pub lobby: (f64, f64),
}

impl MetricTable {
    pub(crate) fn new(
        book: &str,
        rows: Vec<MetricRow>,
        disconnected: Option<DisconnectedGraphWarning>,
    ) -> Self {
        Self {
            book: book.to_string(),
            rows,
            disconnected,
        }
    }

    #[must_use]
    pub fn book(&self) -> &str {
        &self.book
    }

    #[must_use]
    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&MetricRow> {
        self.rows.get(idx)
    }

    /// Row of the vertex with `label` in `graph`.
    #[must_use]
    pub fn by_label(&self, graph: &EncounterGraph, label: &str) -> Option<&MetricRow> {
        self.get(graph.index_of(label)?)
    }

    #[must_use]
    pub fn disconnected(&self) -> Option<&DisconnectedGraphWarning> {
        self.disconnected.as_ref()
    }

    /// Rows keyed by vertex label.
    #[must_use]
    pub fn export(&self, graph: &EncounterGraph) -> BTreeMap<String, MetricExport> {
        graph
            .vertices()
            .iter()
            .zip(&self.rows)
            .map(|(v, row)| {
                (
                    v.label.clone(),
                    MetricExport {
                        name: v.name.clone(),
                        frequency: v.frequency,
                        metrics: *row,
                    },
                )
            })
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CentralityStats {
        CentralityStats {
            degree: mean_std(self.rows.iter().map(|r| r.degree_norm)),
            betweenness: mean_std(self.rows.iter().map(|r| r.betweenness_norm)),
            closeness: mean_std(self.rows.iter().map(|r| r.closeness_norm)),
            lobby: mean_std(self.rows.iter().map(|r| r.lobby_norm)),
        }
    }
}

/// Population mean and standard deviation; `(0, 0)` for no values.
#[allow(clippy::cast_precision_loss)]
fn mean_std(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let n = values.clone().count();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.clone().sum::<f64>() / n as f64;
    let var = values.map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    (mean, var.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_std() {
        let (m, s) = mean_std([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter());
        assert!((m - 5.0).abs() < 1e-12);
        assert!((s - 2.0).abs() < 1e-12);
        assert_eq!(mean_std(std::iter::empty()), (0.0, 0.0));
    }
}
