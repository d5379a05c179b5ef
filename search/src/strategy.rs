//! Frontier merge strategies.
//!
//! A strategy decides how freshly generated nodes combine with the pending
//! frontier. That single decision is what separates breadth-first from
//! depth-first traversal:
//!
//! | Strategy       | Merge                         | Order |
//! |----------------|-------------------------------|-------|
//! | `BreadthFirst` | `frontier ++ new_nodes`       | FIFO  |
//! | `DepthFirst`   | `new_nodes ++ frontier`       | LIFO  |
//!
//! Both keep `new_nodes` in generation order.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Frontier merge policy.
pub trait FrontierStrategy<S> {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Merge `new_nodes` into `frontier`.
    fn merge(&self, frontier: &mut VecDeque<Node<S>>, new_nodes: Vec<Node<S>>);
}

/// Append new nodes after everything already pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl<S> FrontierStrategy<S> for BreadthFirst {
    fn name(&self) -> &'static str {
        "breadth"
    }

    fn merge(&self, frontier: &mut VecDeque<Node<S>>, new_nodes: Vec<Node<S>>) {
        frontier.extend(new_nodes);
    }
}

/// Put new nodes ahead of everything already pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl<S> FrontierStrategy<S> for DepthFirst {
    fn name(&self) -> &'static str {
        "depth"
    }

    fn merge(&self, frontier: &mut VecDeque<Node<S>>, new_nodes: Vec<Node<S>>) {
        for node in new_nodes.into_iter().rev() {
            frontier.push_front(node);
        }
    }
}

/// Selectable strategy, as chosen by settings, flags or the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[serde(alias = "breadth_first", alias = "bfs")]
    Breadth,
    #[serde(alias = "depth_first", alias = "dfs")]
    Depth,
}

impl StrategyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breadth => "breadth",
            Self::Depth => "depth",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breadth => "Breadth-First Search",
            Self::Depth => "Depth-First Search",
        }
    }
}

impl<S> FrontierStrategy<S> for StrategyKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn merge(&self, frontier: &mut VecDeque<Node<S>>, new_nodes: Vec<Node<S>>) {
        match self {
            Self::Breadth => BreadthFirst.merge(frontier, new_nodes),
            Self::Depth => DepthFirst.merge(frontier, new_nodes),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {input:?} (expected \"breadth\" or \"depth\")")]
pub struct ParseStrategyError {
    pub input: String,
}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth" | "breadth-first" | "breadth_first" | "bfs" => Ok(Self::Breadth),
            "depth" | "depth-first" | "depth_first" | "dfs" => Ok(Self::Depth),
            _ => Err(ParseStrategyError {
                input: s.to_string(),
            }),
        }
    }
}
