//! Determinism: identical inputs give identical paths, counters, and node
//! log digests, within one process and across processes.

use std::path::Path;
use std::process::Command;

use linpuzzle_harness::node_log::{digest_records, NodeRecord};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use lock_tests::puzzle::{breadth_first, depth_first_recorded, state};

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_fixture(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn repeated_breadth_first_runs_match() {
    for initial in LinearState::all() {
        let first = breadth_first(initial);
        for _ in 0..3 {
            let again = breadth_first(initial);
            assert_eq!(again.path, first.path, "{initial}");
            assert_eq!(again.stats, first.stats, "{initial}");
            assert_eq!(again.termination, first.termination, "{initial}");
        }
    }
}

#[test]
fn repeated_depth_first_runs_log_the_same_nodes() {
    let digest = |symbols: [u8; 4]| {
        let (result, sink) = depth_first_recorded(state(symbols), 6);
        let records: Vec<NodeRecord> = sink.nodes().iter().map(NodeRecord::from_node).collect();
        (result.path, digest_records(&records).unwrap())
    };
    for symbols in [[4, 1, 3, 2], [4, 3, 2, 1], [1, 3, 2, 4]] {
        let first = digest(symbols);
        for _ in 0..5 {
            assert_eq!(digest(symbols), first);
        }
    }
}

#[test]
fn crossproc_breadth_first_four_env_variants() {
    let root = workspace_root();
    let baseline = run_fixture(&root, &["breadth"], &[]);

    assert!(baseline.contains("termination_reason=goal_reached"));
    assert!(baseline.contains("node_log_digest=sha256:"));
    assert!(baseline.contains("initial_state=[4, 1, 3, 2]"));

    let tmp = std::env::temp_dir();
    let tmp = tmp.to_string_lossy();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (root.as_str(), &[("LC_ALL", "C")]),
        (root.as_str(), &[("LANG", "en_US.UTF-8"), ("TZ", "Asia/Tokyo")]),
        (&*tmp, &[("RUST_LOG", "debug")]),
    ];
    for (dir, env) in variants {
        let out = run_fixture(dir, &["breadth"], env);
        assert_eq!(out, baseline, "variant dir={dir} env={env:?}");
    }
}

#[test]
fn crossproc_depth_first_matches_in_process() {
    let root = workspace_root();
    let out = run_fixture(&root, &["depth", "4", "3", "2", "1"], &[]);

    let (result, _) = depth_first_recorded(state([4, 3, 2, 1]), 6);
    let path = result.path.expect("solvable within six swaps").join(",");
    assert!(out.contains(&format!("path={path}\n")), "{out}");
    assert!(out.contains(&format!("expansions={}\n", result.stats.expansions)));
    assert!(out.contains("strategy=depth\n"), "{out}");
}
