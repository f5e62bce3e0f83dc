//! `.conjugation.toml` configuration.
//!
//! ```toml
//! [statistic]
//! rounding = "half_even"   # or "half_away_from_zero"
//!
//! [output]
//! format = "text"          # or "json"
//! ```
//!
//! An explicit `--config` path must exist and parse. Without one, the file
//! is searched for from the working directory upward; a discovered file
//! that fails to parse is reported and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::RoundingMode;
use crate::errors::{ConjugationError, Result};
use crate::io::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".conjugation.toml";

/// How many directories (including the start) the search visits.
pub const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConjugationConfig {
    #[serde(default)]
    pub statistic: StatisticConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatisticConfig {
    #[serde(default)]
    pub rounding: RoundingMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Parse configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<ConjugationConfig> {
    toml::from_str::<ConjugationConfig>(contents).map_err(|e| {
        ConjugationError::config(format!("failed to parse {CONFIG_FILE_NAME}: {e}"), None)
    })
}

/// Load configuration from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<ConjugationConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConjugationError::config(
            format!("failed to read {}: {e}", path.display()),
            Some(path.to_path_buf()),
        )
    })?;
    parse_config(&contents).map_err(|e| match e {
        ConjugationError::Config { message, .. } => ConjugationError::Config {
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// `start` and its ancestors, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config(path: &Path) -> Option<ConjugationConfig> {
    if !path.is_file() {
        return None;
    }
    match load_config_from_path(path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{e}. Ignoring {}", path.display());
            None
        }
    }
}

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`].
pub fn discover_config(start: &Path) -> Option<ConjugationConfig> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config(&path))
}

/// Discover configuration from the working directory, else defaults.
pub fn load_config() -> ConjugationConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            warn!("Failed to get current directory: {e}. Using default config.");
            return ConjugationConfig::default();
        }
    };

    discover_config(&current).unwrap_or_else(|| {
        debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        ConjugationConfig::default()
    })
}
