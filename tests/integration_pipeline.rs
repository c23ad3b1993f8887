// tests/integration_pipeline.rs
//! End-to-end: record files on disk through analysis to JSON results.

use charnet_core::cli::args::AnalyzeArgs;
use charnet_core::cli::handlers::{handle_analyze, handle_check};
use charnet_core::config::Config;
use charnet_core::exit::CharnetExit;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HOBBIT: &str = "\
* The Hobbit, abridged
BI Bilbo Baggins
GA Gandalf
GO Gollum
SM Smaug
TH Thorin

1:BI,GA,TH
2:BI,GO
3:BI,TH;GA,TH
4:BI,SM;TH
";

const CAROL: &str = "AA alice\nAB bob\nAC carol\n\n1:AA,AB;AB,AC\n";

fn setup(files: &[(&str, &str)]) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    for (name, text) in files {
        fs::write(data.join(format!("{name}.dat")), text).unwrap();
    }
    let config = Config::default().with_output_dir(dir.path().join("out"));
    (dir, config)
}

fn dir_args(dir: &Path) -> AnalyzeArgs {
    AnalyzeArgs {
        dir: Some(dir.join("data")),
        ..AnalyzeArgs::default()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_analyze_directory_writes_results() {
    let (dir, config) = setup(&[("carol", CAROL), ("hobbit", HOBBIT)]);
    let exit = handle_analyze(&dir_args(dir.path()), &config).unwrap();
    assert_eq!(exit, CharnetExit::Success);

    let out = dir.path().join("out");
    let metrics = read_json(&out.join("carol-metrics.json"));
    assert_eq!(metrics["AB"]["name"], "bob");
    assert_eq!(metrics["AB"]["degree"], 2);
    assert_eq!(metrics["AB"]["frequency"], 2);
    assert_eq!(metrics["AA"]["lobby"], 1);

    let global = read_json(&out.join("hobbit-global.json"));
    assert_eq!(global["book"], "hobbit");
    assert_eq!(global["genre"], "fiction");
    assert_eq!(global["vertices"], 5);
    assert_eq!(global["edges"], 5);
    assert_eq!(global["edge_list"].as_array().map(Vec::len), Some(5));
    assert!(global["bicomponents"]["articulation_points"]
        .as_array()
        .unwrap()
        .contains(&Value::from("BI")));

    let fit = read_json(&out.join("hobbit-fit.json"));
    assert!(fit["alpha"].as_f64().unwrap() > 1.0);
    let empirical = fit["empirical"].as_array().unwrap();
    assert_eq!(empirical[0]["y"], 1.0);
}

#[test]
fn test_bad_record_is_skipped() {
    let (dir, config) = setup(&[("carol", CAROL), ("broken", "AB bob\nAA alice\n")]);
    let exit = handle_analyze(&dir_args(dir.path()), &config).unwrap();
    assert_eq!(exit, CharnetExit::PartialFailure);

    let out = dir.path().join("out");
    assert!(out.join("carol-metrics.json").exists());
    assert!(!out.join("broken-metrics.json").exists());
}

#[test]
fn test_fail_fast_stops_the_run() {
    let (dir, config) = setup(&[("broken", "AB bob\nAA alice\n")]);
    let args = AnalyzeArgs {
        fail_fast: true,
        ..dir_args(dir.path())
    };
    assert_eq!(handle_analyze(&args, &config).unwrap(), CharnetExit::InvalidInput);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_unknown_book_is_an_error() {
    let (_dir, config) = setup(&[]);
    let args = AnalyzeArgs {
        books: vec!["ulysses".to_string()],
        ..AnalyzeArgs::default()
    };
    let err = handle_analyze(&args, &config).unwrap_err();
    assert!(err.to_string().contains("ulysses"));
}

#[test]
fn test_catalog_book_from_configured_dir() {
    let (dir, mut config) = setup(&[("hobbit", HOBBIT)]);
    config.paths.data_dir = dir.path().join("data");
    let args = AnalyzeArgs {
        books: vec!["Hobbit".to_string()],
        ..AnalyzeArgs::default()
    };
    assert_eq!(handle_analyze(&args, &config).unwrap(), CharnetExit::Success);
    assert!(dir.path().join("out/hobbit-global.json").exists());
}

#[test]
fn test_check() {
    let (dir, config) = setup(&[("carol", CAROL), ("dup", "AA a\nAA b\n")]);
    let data = dir.path().join("data");
    assert_eq!(handle_check(&data.join("carol.dat"), &config).unwrap(), CharnetExit::Success);
    assert_eq!(handle_check(&data.join("dup.dat"), &config).unwrap(), CharnetExit::InvalidInput);
    assert!(handle_check(&data.join("missing.dat"), &config).is_err());
}
