//! Source hygiene for the page crate.
//!
//! Scans `page/src/` for patterns the crate keeps out of production code.
//! Each pattern has a budget. Budgets only go down: to add a hit, remove one
//! elsewhere first.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// `(pattern, budget, why it is budgeted)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on a bad value"),
    (".expect(", 0, "panics on a bad value"),
    ("panic!(", 0, "aborts the page script"),
    ("unreachable!(", 0, "aborts the page script"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result unread"),
    (".ok()", 0, "discards an error unread"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Browser bindings belong to the client crate. The page crate stays pure.
const BROWSER_CRATES: &[&str] = &["web_sys", "js_sys", "wasm_bindgen", "gloo_timers"];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, test siblings excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn report(found: &[(String, usize)]) -> String {
    found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")), "run from the page crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{}", report(&found)));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn no_browser_bindings() {
    let files = source_files();
    for krate in BROWSER_CRATES {
        let found = hits(&files, &format!("{krate}::"));
        assert!(found.is_empty(), "{krate} used in page crate:\n{}", report(&found));
    }
}
