//! Binary that runs the linear puzzle through the engine and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [breadth|depth] [a b c d]`
//! (defaults: `breadth 4 1 3 2`, depth limit 6)
//!
//! Output: key=value lines (see source for format).

use linpuzzle_harness::node_log::{digest_records, NodeRecord};
use linpuzzle_harness::worlds::linear_puzzle::{LinearPuzzle, ProblemKind};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_search::search::run_search;
use linpuzzle_search::sink::MemorySink;
use linpuzzle_search::strategy::StrategyKind;

const DEPTH_LIMIT: u64 = 6;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let strategy: StrategyKind = args
        .first()
        .map_or(Ok(StrategyKind::Breadth), |s| s.parse())
        .expect("strategy must be breadth or depth");
    let initial = if args.len() > 1 {
        let symbols: Vec<u8> = args[1..]
            .iter()
            .map(|s| s.parse().expect("symbols are integers"))
            .collect();
        LinearState::try_from(symbols).expect("initial state is a permutation of 1..=4")
    } else {
        LinearState::new([4, 1, 3, 2]).expect("sample state is valid")
    };

    let kind = ProblemKind::for_strategy(strategy, DEPTH_LIMIT);
    let problem = LinearPuzzle::new(initial, kind).problem();
    let mut sink = MemorySink::new();
    let result = run_search(&problem, &strategy, &mut sink).expect("search run failed");

    let records: Vec<NodeRecord> = sink.into_nodes().iter().map(NodeRecord::from_node).collect();
    let digest = digest_records(&records).expect("records encode");
    let termination =
        serde_json::to_value(result.termination).expect("termination serializes");
    let path = result
        .path
        .as_ref()
        .map_or_else(|| "none".to_string(), |p| p.join(","));

    println!("strategy={strategy}");
    println!("initial_state={initial}");
    println!("termination_reason={}", termination["type"].as_str().unwrap_or("?"));
    println!("path={path}");
    println!("expansions={}", result.stats.expansions);
    println!("nodes_generated={}", result.stats.nodes_generated);
    println!("node_log_digest={digest}");
}
