// src/report/console.rs
use colored::Colorize;

use super::pluralize;
use crate::analysis::{BookAnalysis, RunReport};
use crate::catalog::{Book, BOOKS};
use crate::config::Config;
use crate::graph::EncounterGraph;
use crate::metrics::MetricRow;

/// Characters listed per book in the summary.
const TOP_CHARACTERS: usize = 5;

/// Prints one block per analyzed book, then the failures.
pub fn print_run(report: &RunReport) {
    for analysis in &report.analyses {
        print_book(analysis);
        println!();
    }
    for (book, e) in &report.failures {
        println!("{} {}: {e}", "X".red().bold(), book.bold());
    }
    print_totals(report);
}

pub fn print_book(a: &BookAnalysis) {
    let g = &a.global.measures;
    let genre = a.source.genre.map_or('-', |genre| genre.letter());
    println!(
        "{} [{genre}] {} characters, {} encounters",
        a.name().bold().cyan(),
        g.vertices,
        g.edges
    );
    println!(
        "  density {:.3}  transitivity {:.3}  hapax {} ({:.3})  dis {}",
        g.density, g.transitivity, g.hapax_legomena, g.hapax_ratio, g.dis_legomena
    );
    println!(
        "  bicomponents {}  articulation points {}",
        a.global.bicomponents.components.len(),
        a.global.bicomponents.articulation_points.len()
    );

    match &a.fit {
        Ok(fit) => println!(
            "  power law: alpha {:.3}  k_min {}  KS {:.3}  tail {}",
            fit.alpha, fit.k_min, fit.ks_distance, fit.tail_size
        ),
        Err(e) => println!("  {} {e}", "no fit:".yellow()),
    }
    if let Some(w) = a.metrics.disconnected() {
        println!("  {} {w}", "~".yellow().bold());
    }

    let s = &a.global.centrality;
    println!(
        "  {} {:>7} {:>7} {:>7} {:>7}",
        format!("{:<24}", "mean / std").dimmed(),
        "degree",
        "betw",
        "close",
        "lobby"
    );
    println!(
        "  {:<24} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
        "",
        s.degree.0,
        s.betweenness.0,
        s.closeness.0,
        s.lobby.0
    );
    println!(
        "  {:<24} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
        "",
        s.degree.1,
        s.betweenness.1,
        s.closeness.1,
        s.lobby.1
    );

    for (label, row) in top_by_degree(a) {
        let name = a
            .graph
            .index_of(label)
            .and_then(|i| a.graph.vertex(i))
            .map_or("", |v| v.name.as_str());
        println!(
            "  {} {:<19} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
            format!("{label:<4}").green(),
            truncate(name, 19),
            row.degree_norm,
            row.betweenness_norm,
            row.closeness_norm,
            row.lobby_norm
        );
    }
}

fn top_by_degree(a: &BookAnalysis) -> Vec<(&str, MetricRow)> {
    let mut rows: Vec<(&str, MetricRow)> = a
        .graph
        .vertices()
        .iter()
        .zip(a.metrics.rows())
        .map(|(v, r)| (v.label.as_str(), *r))
        .collect();
    // Stable: ties keep label order.
    rows.sort_by(|x, y| y.1.degree.cmp(&x.1.degree));
    rows.truncate(TOP_CHARACTERS);
    rows
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

fn print_totals(report: &RunReport) {
    let ok = report.analyses.len();
    let failed = report.failures.len();
    if failed == 0 {
        println!("{} Analyzed {ok} {}.", "OK".green().bold(), pluralize("book", ok));
    } else {
        println!(
            "{} Analyzed {ok} {}, skipped {failed}.",
            "~".yellow().bold(),
            pluralize("book", ok)
        );
    }
}

/// Prints the book table with resolved record paths.
pub fn print_catalog(config: &Config) {
    let header = format!(
        "{:<12} {:<10} {:<12} {:<8} {}",
        "BOOK", "GENRE", "COLOR", "SOURCE", "PATH"
    );
    println!("{}", header.bold());
    for book in BOOKS {
        print_catalog_row(book, config);
    }
}

fn print_catalog_row(book: &Book, config: &Config) {
    let path = book.record_path(config);
    let path_text = path.display().to_string();
    let shown = if path.exists() {
        path_text.normal()
    } else {
        path_text.dimmed()
    };
    println!(
        "{:<12} {:<10} {:<12} {:<8} {shown}",
        book.title(),
        book.genre.to_string(),
        book.color,
        format!("{:?}", book.source).to_lowercase()
    );
}

/// One-line verdict for a record that built cleanly.
pub fn print_check(graph: &EncounterGraph) {
    println!(
        "{} {}: {} {}, {} {}, {} hapax legomena",
        "OK".green().bold(),
        graph.name().bold(),
        graph.vertex_count(),
        if graph.vertex_count() == 1 { "vertex" } else { "vertices" },
        graph.edge_count(),
        pluralize("edge", graph.edge_count()),
        graph.hapax_legomena()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("bilbo", 19), "bilbo");
        assert_eq!(truncate("Bilbo Baggins of Bag End", 10), "Bilbo Bag~");
    }
}
