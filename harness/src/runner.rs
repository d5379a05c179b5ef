//! Harness runner: builds the puzzle problem, runs the search, and packages
//! the outcome as a serializable report.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → LinearPuzzle::problem()
//!   → NodeLog::create() (optional)
//!   → run_search_with_policy() → RunReport
//! ```
//!
//! The runner owns timing and persistence. Search semantics live entirely in
//! `linpuzzle-search`.

use std::path::PathBuf;
use std::time::Instant;

use chrono::{DateTime, Local};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_search::error::SearchError;
use linpuzzle_search::policy::SearchPolicy;
use linpuzzle_search::search::{run_search_with_policy, SearchStats, TerminationReason};
use linpuzzle_search::sink::{NodeSink, NullSink};
use linpuzzle_search::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::digest::ContentHash;
use crate::node_log::{NodeLog, NodeLogError};
use crate::worlds::linear_puzzle::{LinearPuzzle, ProblemKind};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    NodeLog(#[from] NodeLogError),
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Everything a run needs, resolved from settings and command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub initial_state: LinearState,
    pub strategy: StrategyKind,
    pub depth_limit: u64,
    pub policy: SearchPolicy,
    /// Where to write the node log. `None` disables it.
    pub node_log_dir: Option<PathBuf>,
}

impl RunConfig {
    #[must_use]
    pub fn from_settings(settings: &Settings, strategy: StrategyKind) -> Self {
        Self {
            initial_state: settings.initial_state,
            strategy,
            depth_limit: settings.depth_limit,
            policy: SearchPolicy {
                max_expansions: settings.max_expansions,
            },
            node_log_dir: Some(settings.output_dir.clone()),
        }
    }

    #[must_use]
    pub fn problem_kind(&self) -> ProblemKind {
        ProblemKind::for_strategy(self.strategy, self.depth_limit)
    }
}

/// Where the node log went and what it contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLogSummary {
    pub path: PathBuf,
    pub records: u64,
    pub digest: ContentHash,
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub world: String,
    pub strategy: StrategyKind,
    pub problem: ProblemKind,
    pub initial_state: LinearState,
    pub started_at: DateTime<Local>,
    pub termination: TerminationReason,
    pub path: Option<Vec<String>>,
    pub stats: SearchStats,
    pub elapsed_secs: f64,
    pub node_log: Option<NodeLogSummary>,
}

impl RunReport {
    /// One-line result for the console.
    #[must_use]
    pub fn render_result(&self) -> String {
        match (&self.termination, &self.path) {
            (TerminationReason::GoalReached { .. }, Some(path)) => {
                format!("Result: [{}]", path.join(", "))
            }
            (TerminationReason::ExpansionBudgetExceeded, _) => format!(
                "Search stopped after {} expansions without a solution",
                self.stats.expansions
            ),
            _ => "There is no solution".to_string(),
        }
    }

    #[must_use]
    pub fn render_elapsed(&self) -> String {
        format!("Total processing time: {}", format_elapsed(self.elapsed_secs))
    }
}

/// Seconds with two decimals, or minutes once past a minute.
#[must_use]
pub fn format_elapsed(secs: f64) -> String {
    if secs > 60.0 {
        format!("{:.2} minutes", secs / 60.0)
    } else {
        format!("{secs:.2} seconds")
    }
}

/// Run one search, timestamped now.
///
/// # Errors
///
/// See [`run_at`].
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    run_at(config, Local::now())
}

/// Run one search as if started at `started_at`. The timestamp names the
/// node log file.
///
/// # Errors
///
/// - [`RunError::NodeLog`] if the node log cannot be opened.
/// - [`RunError::Search`] for structural search failures, including a node
///   log write failure mid-run.
pub fn run_at(config: &RunConfig, started_at: DateTime<Local>) -> Result<RunReport, RunError> {
    let world = LinearPuzzle::new(config.initial_state, config.problem_kind());
    let problem = world.problem();

    let mut node_log = match &config.node_log_dir {
        Some(dir) => Some(NodeLog::create(dir, &started_at)?),
        None => None,
    };

    tracing::info!(
        world = world.world_id(),
        strategy = config.strategy.as_str(),
        initial_state = %config.initial_state,
        depth_limit = ?world.kind().depth_limit(),
        "run started"
    );

    let mut discard = NullSink;
    let clock = Instant::now();
    let result = {
        let sink: &mut dyn NodeSink<LinearState> = match node_log.as_mut() {
            Some(log) => log,
            None => &mut discard,
        };
        run_search_with_policy(&problem, &config.strategy, &config.policy, sink)?
    };
    let elapsed_secs = clock.elapsed().as_secs_f64();

    let node_log = node_log.map(|log| NodeLogSummary {
        path: log.path().to_path_buf(),
        records: log.records_written(),
        digest: log.digest(),
    });

    tracing::info!(
        termination = ?result.termination,
        expansions = result.stats.expansions,
        elapsed_secs,
        "run finished"
    );

    Ok(RunReport {
        world: world.world_id().to_string(),
        strategy: config.strategy,
        problem: world.kind(),
        initial_state: config.initial_state,
        started_at,
        termination: result.termination,
        path: result.path,
        stats: result.stats,
        elapsed_secs,
        node_log,
    })
}
