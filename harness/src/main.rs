//! `linear-puzzle`: solve the four-cell swap puzzle from a settings file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use linpuzzle_harness::config::{Settings, DEFAULT_SETTINGS_PATH};
use linpuzzle_harness::logging;
use linpuzzle_harness::prompt::{prompt_strategy, MenuChoice};
use linpuzzle_harness::runner::{run, RunConfig};
use linpuzzle_search::strategy::StrategyKind;

#[derive(Debug, Parser)]
#[command(
    name = "linear-puzzle",
    version,
    about = "Breadth- and depth-first search over the linear swap puzzle"
)]
struct Args {
    /// Settings file (YAML).
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Search strategy. Asked interactively when neither this flag nor the
    /// settings file provides one.
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Depth bound for depth-first search.
    #[arg(long)]
    depth_limit: Option<u64>,

    /// Directory for the node log.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Stop after this many expansions.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Do not write a node log.
    #[arg(long)]
    no_log: bool,

    /// Print the run report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings)
        .with_context(|| format!("loading settings from {}", args.settings.display()))?;
    if let Some(limit) = args.depth_limit {
        settings.depth_limit = limit;
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }
    if args.max_expansions.is_some() {
        settings.max_expansions = args.max_expansions;
    }

    logging::init(settings.debug_level).context("initialising logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "Debug level set to: {}", settings.debug_level)?;
        writeln!(out, "Initial state set to: {}\n", settings.initial_state)?;
    }

    // In JSON mode stdout carries only the report, so the menu goes to stderr.
    let strategy = match args.strategy.or(settings.strategy) {
        Some(strategy) => strategy,
        None => {
            let choice = if args.json {
                prompt_strategy(io::stdin().lock(), io::stderr().lock())?
            } else {
                prompt_strategy(io::stdin().lock(), &mut out)?
            };
            match choice {
                MenuChoice::Strategy(strategy) => strategy,
                MenuChoice::Exit => {
                    let goodbye = "\nExiting the application. Goodbye!\n";
                    if args.json {
                        writeln!(io::stderr(), "{goodbye}")?;
                    } else {
                        writeln!(out, "{goodbye}")?;
                    }
                    return Ok(());
                }
            }
        }
    };
    if !args.json {
        writeln!(out, "\nStrategy set to {}.\n", strategy.label())?;
    }

    let mut config = RunConfig::from_settings(&settings, strategy);
    if args.no_log {
        config.node_log_dir = None;
    }

    let report = run(&config).context("running search")?;

    if args.json {
        serde_json::to_writer_pretty(&mut out, &report).context("encoding report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.render_elapsed())?;
        writeln!(out, "{}", report.render_result())?;
        if let Some(log) = &report.node_log {
            writeln!(
                out,
                "Node log: {} ({} nodes, {})",
                log.path.display(),
                log.records,
                log.digest
            )?;
        }
    }
    Ok(())
}
