//! End-to-end runs driven by a settings file, with the node log on disk.

use std::path::Path;

use linpuzzle_harness::config::{ConfigError, DebugLevel, Settings};
use linpuzzle_harness::node_log::{digest_records, read_node_log};
use linpuzzle_harness::runner::{run, RunConfig};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_kernel::operators::swap::Swap;
use linpuzzle_search::node::NodeId;
use linpuzzle_search::strategy::StrategyKind;
use lock_tests::puzzle::state;

fn write_settings(dir: &Path, body: &str) -> Settings {
    let path = dir.join("settings.yml");
    std::fs::write(&path, body).unwrap();
    Settings::load(&path).unwrap()
}

#[test]
fn settings_file_drives_a_logged_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("output");
    let settings = write_settings(
        dir.path(),
        &format!(
            "initial_state: [4, 1, 3, 2]\ndebug_level: none\noutput_dir: {}\n",
            out.display()
        ),
    );
    assert_eq!(settings.debug_level, DebugLevel::None);

    let report = run(&RunConfig::from_settings(&settings, StrategyKind::Breadth)).unwrap();
    let path = report.path.clone().unwrap();
    assert_eq!(Swap::replay(state([4, 1, 3, 2]), &path).unwrap(), LinearState::GOAL);

    let summary = report.node_log.expect("node log enabled");
    assert!(summary.path.starts_with(&out));
    let name = summary.path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("nodes_expanded_") && name.ends_with(".yml"), "{name}");

    let records = read_node_log(&summary.path).unwrap();
    assert_eq!(records.len() as u64, report.stats.nodes_generated);
    assert_eq!(digest_records(&records).unwrap(), summary.digest);
}

#[test]
fn logged_nodes_are_in_generation_order_with_known_parents() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(
        dir.path(),
        &format!(
            "initial_state: [3, 4, 1, 2]\ndebug_level: error\nstrategy: depth\noutput_dir: {}\n",
            dir.path().join("out").display()
        ),
    );
    let strategy = settings.strategy.expect("strategy set in file");
    let report = run(&RunConfig::from_settings(&settings, strategy)).unwrap();
    let records = read_node_log(&report.node_log.unwrap().path).unwrap();

    // Root is id 1 and never logged.
    let mut seen = vec![NodeId::new(1)];
    for pair in records.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
    for record in &records {
        let parent = record.parent.expect("logged nodes are children");
        assert!(seen.contains(&parent), "parent {parent} of {} not seen", record.id);
        let op = record.operator.as_deref().expect("children carry an operator");
        assert!(Swap::from_name(op).is_some(), "{op}");
        seen.push(record.id);
    }
}

#[test]
fn solved_start_writes_an_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(
        dir.path(),
        &format!(
            "initial_state: [1, 2, 3, 4]\ndebug_level: info\noutput_dir: {}\n",
            dir.path().display()
        ),
    );
    let report = run(&RunConfig::from_settings(&settings, StrategyKind::Breadth)).unwrap();
    assert_eq!(report.path, Some(Vec::new()));
    assert_eq!(report.stats.expansions, 0);
    let summary = report.node_log.unwrap();
    assert_eq!(summary.records, 0);
    assert!(read_node_log(&summary.path).unwrap().is_empty());
}

#[test]
fn budget_from_settings_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let settings = write_settings(
        dir.path(),
        "initial_state: [4, 3, 2, 1]\ndebug_level: none\nmax_expansions: 3\n",
    );
    let mut config = RunConfig::from_settings(&settings, StrategyKind::Breadth);
    config.node_log_dir = None;
    let report = run(&config).unwrap();
    assert!(report.path.is_none());
    assert_eq!(report.stats.expansions, 3);
}

#[test]
fn invalid_settings_never_reach_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    std::fs::write(&path, "initial_state: [4, 4, 3, 2]\ndebug_level: info\n").unwrap();
    assert!(matches!(
        Settings::load(&path),
        Err(ConfigError::InitialStateSymbols)
    ));

    std::fs::write(&path, "initial_state: [4, 1, 3, 2]\ndebug_level: verbose\n").unwrap();
    assert!(matches!(Settings::load(&path), Err(ConfigError::DebugLevel)));

    std::fs::write(&path, "initial_state: [4, 1, 3, 2]\ndebug_level: info\nstrategy: sideways\n")
        .unwrap();
    assert!(matches!(Settings::load(&path), Err(ConfigError::Parse { .. })));
}
