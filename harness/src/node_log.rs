//! Node log: every generated node, appended to a YAML file as it is created.
//!
//! # File layout
//!
//! ```text
//! <output_dir>/nodes_expanded_<YYYYmmdd-HHMM>.yml
//!
//! - id: 2
//!   state: [2, 1, 3, 4]
//!   parent: 1
//!   operator: ie
//! - id: 3
//!   ...
//! ```
//!
//! Each record is written and flushed before the engine continues, so the
//! file is a valid YAML sequence after every write. Runs that start within
//! the same minute append to the same file.
//!
//! The log also keeps a running digest over the records written by this
//! instance. Records are hashed as JSON (one chunk each) under
//! [`DOMAIN_NODE_LOG`], so the digest does not depend on YAML formatting.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_search::node::{Node, NodeId};
use linpuzzle_search::sink::{NodeSink, SinkError};
use serde::{Deserialize, Serialize};

use crate::digest::{ContentHash, StreamDigest, DOMAIN_NODE_LOG};

#[derive(Debug, thiserror::Error)]
pub enum NodeLogError {
    #[error("node log I/O error at {path}: {detail}")]
    Io { path: PathBuf, detail: String },
    #[error("cannot encode node record: {detail}")]
    Encode { detail: String },
    #[error("cannot decode node log {path}: {detail}")]
    Decode { path: PathBuf, detail: String },
}

impl From<NodeLogError> for SinkError {
    fn from(e: NodeLogError) -> Self {
        match e {
            NodeLogError::Io { .. } | NodeLogError::Decode { .. } => Self::Io {
                detail: e.to_string(),
            },
            NodeLogError::Encode { detail } => Self::Encode { detail },
        }
    }
}

/// One line of the log: a node's identity and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub state: LinearState,
    pub parent: Option<NodeId>,
    pub operator: Option<String>,
}

impl NodeRecord {
    #[must_use]
    pub fn from_node(node: &Node<LinearState>) -> Self {
        Self {
            id: node.id(),
            state: *node.state(),
            parent: node.parent_id(),
            operator: node.operator().map(str::to_string),
        }
    }
}

/// File name for a log opened at `at`.
#[must_use]
pub fn log_file_name(at: &DateTime<Local>) -> String {
    format!("nodes_expanded_{}.yml", at.format("%Y%m%d-%H%M"))
}

/// Append-only node log. Implements [`NodeSink`] for the linear puzzle.
#[derive(Debug)]
pub struct NodeLog {
    path: PathBuf,
    file: File,
    digest: StreamDigest,
    records_written: u64,
}

impl NodeLog {
    /// Open the log for a run started at `started_at`, creating `dir` if
    /// needed.
    ///
    /// # Errors
    ///
    /// [`NodeLogError::Io`] if the directory or file cannot be created.
    pub fn create(dir: &Path, started_at: &DateTime<Local>) -> Result<Self, NodeLogError> {
        std::fs::create_dir_all(dir).map_err(|e| NodeLogError::Io {
            path: dir.to_path_buf(),
            detail: e.to_string(),
        })?;
        Self::create_at(&dir.join(log_file_name(started_at)))
    }

    /// Open (or continue) the log at an explicit path.
    ///
    /// # Errors
    ///
    /// [`NodeLogError::Io`] if the file cannot be opened for appending.
    pub fn create_at(path: &Path) -> Result<Self, NodeLogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| NodeLogError::Io {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), "node log opened");
        Ok(Self {
            path: path.to_path_buf(),
            file,
            digest: StreamDigest::new(DOMAIN_NODE_LOG),
            records_written: 0,
        })
    }

    /// Append one record and fold it into the digest.
    ///
    /// # Errors
    ///
    /// [`NodeLogError::Encode`] or [`NodeLogError::Io`].
    pub fn append(&mut self, record: &NodeRecord) -> Result<(), NodeLogError> {
        let yaml = serde_yaml::to_string(std::slice::from_ref(record)).map_err(|e| {
            NodeLogError::Encode {
                detail: e.to_string(),
            }
        })?;
        let json = serde_json::to_vec(record).map_err(|e| NodeLogError::Encode {
            detail: e.to_string(),
        })?;

        self.file
            .write_all(yaml.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| NodeLogError::Io {
                path: self.path.clone(),
                detail: e.to_string(),
            })?;

        self.digest.update(&json);
        self.records_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records appended through this handle.
    #[must_use]
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Digest of the records appended through this handle.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        self.digest.current()
    }
}

impl NodeSink<LinearState> for NodeLog {
    fn record(&mut self, node: &Node<LinearState>) -> Result<(), SinkError> {
        self.append(&NodeRecord::from_node(node))
            .map_err(SinkError::from)
    }
}

/// Digest a sequence of records the same way [`NodeLog`] does.
///
/// # Errors
///
/// [`NodeLogError::Encode`] if a record cannot be serialized.
pub fn digest_records(records: &[NodeRecord]) -> Result<ContentHash, NodeLogError> {
    let mut digest = StreamDigest::new(DOMAIN_NODE_LOG);
    for record in records {
        let json = serde_json::to_vec(record).map_err(|e| NodeLogError::Encode {
            detail: e.to_string(),
        })?;
        digest.update(&json);
    }
    Ok(digest.current())
}

/// Load every record in a log file.
///
/// # Errors
///
/// [`NodeLogError::Io`] if the file cannot be read, [`NodeLogError::Decode`]
/// if it is not a sequence of node records.
pub fn read_node_log(path: &Path) -> Result<Vec<NodeRecord>, NodeLogError> {
    let text = std::fs::read_to_string(path).map_err(|e| NodeLogError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&text).map_err(|e| NodeLogError::Decode {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
