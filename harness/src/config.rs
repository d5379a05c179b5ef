//! Run settings loaded from a YAML file.
//!
//! ```yaml
//! initial_state: [4, 1, 3, 2]
//! debug_level: info
//! # optional
//! depth_limit: 6
//! strategy: breadth
//! output_dir: data/output
//! max_expansions: 10000
//! ```
//!
//! Loading is fail-closed: a missing or malformed required field is a
//! [`ConfigError`] and no search runs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use linpuzzle_kernel::carrier::linear_state::{LinearState, StateError, CELL_COUNT};
use linpuzzle_search::strategy::StrategyKind;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub const DEFAULT_SETTINGS_PATH: &str = "data/input/settings.yml";
pub const DEFAULT_OUTPUT_DIR: &str = "data/output";
pub const DEFAULT_DEPTH_LIMIT: u64 = 6;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read settings file {path}: {detail}")]
    Io { path: PathBuf, detail: String },
    #[error("settings file is not valid YAML: {detail}")]
    Parse { detail: String },
    #[error("'{field}' is missing in the settings file")]
    Missing { field: &'static str },
    #[error("'initial_state' must be a list with exactly 4 elements")]
    InitialStateShape,
    #[error("'initial_state' must contain exactly the numbers 1, 2, 3, and 4")]
    InitialStateSymbols,
    #[error("'debug_level' must be one of ['none', 'info', 'debug', 'warning', 'error']")]
    DebugLevel,
}

/// Verbosity requested by the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugLevel {
    None,
    Info,
    Debug,
    Warning,
    Error,
}

impl DebugLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// `tracing` filter directive for this level.
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::None => "off",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DebugLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::DebugLevel),
        }
    }
}

/// The file as written, before validation.
///
/// Required fields stay untyped here so that shape errors get the same
/// messages no matter how the value is malformed.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    initial_state: Option<Value>,
    #[serde(default)]
    debug_level: Option<Value>,
    #[serde(default)]
    depth_limit: Option<u64>,
    #[serde(default)]
    strategy: Option<StrategyKind>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    max_expansions: Option<u64>,
}

/// Validated settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub initial_state: LinearState,
    pub debug_level: DebugLevel,
    pub depth_limit: u64,
    pub strategy: Option<StrategyKind>,
    pub output_dir: PathBuf,
    pub max_expansions: Option<u64>,
}

impl Settings {
    /// Read and validate a settings file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise see
    /// [`Settings::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let settings = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Validate settings from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking `initial_state`
    /// before `debug_level`.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })?;
        // An empty document parses as null.
        let raw: RawSettings = if value.is_null() {
            RawSettings::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| ConfigError::Parse {
                detail: e.to_string(),
            })?
        };

        let initial_state = parse_initial_state(raw.initial_state.as_ref())?;
        let debug_level = parse_debug_level(raw.debug_level.as_ref())?;

        Ok(Self {
            initial_state,
            debug_level,
            depth_limit: raw.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT),
            strategy: raw.strategy,
            output_dir: raw
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            max_expansions: raw.max_expansions,
        })
    }
}

fn parse_initial_state(value: Option<&Value>) -> Result<LinearState, ConfigError> {
    let value = value.ok_or(ConfigError::Missing {
        field: "initial_state",
    })?;
    let items = value.as_sequence().ok_or(ConfigError::InitialStateShape)?;
    if items.len() != CELL_COUNT {
        return Err(ConfigError::InitialStateShape);
    }
    let symbols = items
        .iter()
        .map(|item| {
            item.as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or(ConfigError::InitialStateSymbols)
        })
        .collect::<Result<Vec<u8>, _>>()?;
    LinearState::try_from(symbols).map_err(|e| match e {
        StateError::WrongLength { .. } => ConfigError::InitialStateShape,
        StateError::NotAPermutation { .. } => ConfigError::InitialStateSymbols,
    })
}

fn parse_debug_level(value: Option<&Value>) -> Result<DebugLevel, ConfigError> {
    let value = value.ok_or(ConfigError::Missing {
        field: "debug_level",
    })?;
    value.as_str().ok_or(ConfigError::DebugLevel)?.parse()
}
