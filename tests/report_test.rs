// Unit tests for report rendering
// Tests the table layout and the JSON shape

use npm_blame_rs::report::{to_json, BlameReport, MAX_COL_WIDTH};
use npm_blame_rs::rules::{Category, Node, RuleSet};
use npm_blame_rs::store::PackageStore;
use std::path::Path;

fn sample_store() -> PackageStore {
    let mut store = PackageStore::new();
    for path in ["pkg/icon.png", "pkg/.travis.yml", "clean/index.js"] {
        store
            .visit::<std::io::Error>(Ok(Node::file(path, 0o644)))
            .unwrap();
    }
    store
}

#[test]
fn test_headline() {
    let report = BlameReport::from_store(Path::new("node_modules"), &sample_store(), false);
    assert_eq!(
        report.headline(),
        "Your node_modules contains 1 packages with errors out of 2 packages"
    );
}

#[test]
fn test_render_lists_only_packages_with_issues() {
    let report = BlameReport::from_store(Path::new("node_modules"), &sample_store(), false);
    let rendered = report.render();

    assert!(rendered.contains("PACKAGE"));
    assert!(rendered.contains("TRAVIS_FILES"));
    assert!(!rendered.contains("HAS_JSX"));
    let pkg_row: Vec<&str> = rendered
        .lines()
        .find(|line| line.starts_with("pkg"))
        .expect("pkg should have a row")
        .split_whitespace()
        .collect();
    // PACKAGE, ERRORS, then one column per category
    assert_eq!(pkg_row, vec!["pkg", "2", "0", "0", "0", "1", "1", "0"]);
    assert!(!rendered.lines().any(|line| line.starts_with("clean")));
}

#[test]
fn test_render_all_packages() {
    let report = BlameReport::from_store(Path::new("node_modules"), &sample_store(), true);
    assert_eq!(report.packages.len(), 2);
    assert!(report.render().lines().any(|line| line.starts_with("clean")));
}

#[test]
fn test_source_columns() {
    let store = PackageStore::with_rules(RuleSet::new(true));
    let report = BlameReport::from_store(Path::new("."), &store, false);
    let rendered = report.render();
    assert!(rendered.contains("HAS_JSX"));
    assert!(rendered.contains("HAS_TS"));
}

#[test]
fn test_long_names_are_truncated() {
    let name = "a".repeat(80);
    let mut store = PackageStore::new();
    store.append_error(&name, Category::Image);

    let report = BlameReport::from_store(Path::new("."), &store, false);
    let rendered = report.render();
    assert!(!rendered.contains(&name));
    assert!(rendered.contains(&format!("{}...", "a".repeat(MAX_COL_WIDTH - 3))));
}

#[test]
fn test_json_shape() {
    let report = BlameReport::from_store(Path::new("node_modules"), &sample_store(), false);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["packages_with_errors"], 1);
    assert_eq!(json["total_packages"], 2);
    assert_eq!(json["packages"][0]["package"], "pkg");
    assert_eq!(json["packages"][0]["total"], 2);
    assert_eq!(json["packages"][0]["categories"]["image"], 1);
    assert_eq!(json["packages"][0]["categories"]["continuous_integration"], 1);
}

#[test]
fn test_json_is_always_an_array() {
    let report = BlameReport::from_store(Path::new("node_modules"), &sample_store(), false);

    let single: serde_json::Value = serde_json::from_str(&to_json(&[report.clone()]).unwrap()).unwrap();
    assert!(single.is_array(), "A single tree should still produce an array");
    assert_eq!(single.as_array().unwrap().len(), 1);
    assert_eq!(single[0]["packages_with_errors"], 1);

    let several: serde_json::Value = serde_json::from_str(&to_json(&[report.clone(), report]).unwrap()).unwrap();
    assert_eq!(several.as_array().unwrap().len(), 2);
}
