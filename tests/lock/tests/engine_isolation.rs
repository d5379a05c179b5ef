//! Build-graph isolation: the search engine knows nothing about the puzzle.
//!
//! Nothing under `search/` may reference the domain crate or its types, and
//! the engine manifest may not depend on it.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment Rust source lines.
const FORBIDDEN_PATTERNS: &[&str] = &[
    "linpuzzle_kernel",
    "linpuzzle_harness",
    "LinearState",
    "Swap::",
    "operators::swap",
];

fn scan_rs_files(dir: &Path) -> Vec<(String, usize, String)> {
    let mut violations = Vec::new();
    walk(dir, &mut violations);
    violations
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn search_sources_do_not_reference_the_puzzle() {
    let search_src = workspace_root().join("search").join("src");
    assert!(search_src.is_dir(), "search/src not found at {search_src:?}");

    let violations = scan_rs_files(&search_src);
    if !violations.is_empty() {
        let mut msg = String::from("search crate references domain code:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn search_manifest_has_no_workspace_dependencies() {
    let manifest = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&manifest).expect("search/Cargo.toml readable");
    for crate_name in ["linpuzzle-kernel", "linpuzzle-harness"] {
        assert!(
            !content.contains(crate_name),
            "search/Cargo.toml references {crate_name}"
        );
    }
}
