// tests/unit_centrality.rs
use charnet_core::graph::{EncounterGraph, GraphBuilder};
use charnet_core::metrics::lobby::{lobby, lobby_all};
use charnet_core::metrics::CentralityEngine;

fn build(text: &str) -> EncounterGraph {
    let mut g = EncounterGraph::new("test");
    GraphBuilder::new().build_str(&mut g, text).unwrap();
    g
}

fn complete(n: usize) -> String {
    let labels: Vec<String> = (0..n).map(|i| format!("V{i:02}")).collect();
    let mut text: String = labels.iter().map(|l| format!("{l} {l}\n")).collect();
    text.push_str(&format!("\n1:{}\n", labels.join(",")));
    text
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_example_lobby() {
    let g = build("AA alice\nAB bob\nAC carol\n\n1:AA,AB;AB,AC\n");
    assert_eq!(lobby_all(&g), vec![1, 1, 1]);
}

#[test]
fn test_lobby_of_isolated_vertex_is_zero() {
    let g = build("AA a\nAB b\nAC c\n\n1:AA,AB\n");
    assert_eq!(lobby(&g, 2), 0);
}

#[test]
fn test_lobby_equals_degree_in_complete_graph() {
    for n in [2, 3, 6, 10] {
        let g = build(&complete(n));
        for v in 0..n {
            assert_eq!(lobby(&g, v), g.degree(v), "Failed: K{n} vertex {v}");
        }
    }
}

#[test]
fn test_complete_graph_centralities() {
    let g = build(&complete(5));
    let table = CentralityEngine::new().compute(&g);
    for row in table.rows() {
        assert_eq!(row.degree, 4);
        assert!(close(row.degree_norm, 1.0));
        assert!(close(row.betweenness, 0.0));
        assert!(close(row.closeness_norm, 1.0));
        assert!(close(row.lobby_norm, 1.0));
    }
    let stats = table.stats();
    assert!(close(stats.degree.0, 1.0));
    assert!(close(stats.degree.1, 0.0));
}

#[test]
fn test_path_betweenness() {
    // AA - AB - AC - AD - AE
    let g = build("AA a\nAB b\nAC c\nAD d\nAE e\n\n1:AA,AB;AB,AC;AC,AD;AD,AE\n");
    let table = CentralityEngine::new().compute(&g);
    let raw: Vec<f64> = table.rows().iter().map(|r| r.betweenness).collect();
    let expected = [0.0, 3.0, 4.0, 3.0, 0.0];
    for (got, want) in raw.iter().zip(expected) {
        assert!(close(*got, want), "{raw:?}");
    }
    let mid = table.by_label(&g, "AC").unwrap();
    assert!(close(mid.betweenness_norm, 4.0 / 6.0));
    assert!(close(mid.closeness, 4.0 / 6.0));
}

#[test]
fn test_weights_do_not_change_paths() {
    let light = build("AA a\nAB b\nAC c\n\n1:AA,AB;AB,AC;AA,AC\n");
    let heavy = build("AA a\nAB b\nAC c\n\n1:AA,AB;AB,AC;AA,AC\n2:AA,AB\n3:AA,AB\n");
    let a = CentralityEngine::new().compute(&light);
    let b = CentralityEngine::new().compute(&heavy);
    assert_eq!(a.rows(), b.rows());
}

#[test]
fn test_export_keyed_by_label() {
    let g = build("AB bob\nAC carol\n\n1:AB,AC\n");
    let table = CentralityEngine::new().compute(&g);
    let export = table.export(&g);
    let keys: Vec<&String> = export.keys().collect();
    assert_eq!(keys, ["AB", "AC"]);
    assert_eq!(export["AB"].name, "bob");
    assert_eq!(export["AC"].metrics.degree, 1);
}
