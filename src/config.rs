//! Pipeline configuration
//!
//! Input and output locations for one pipeline run. Every field has a
//! default matching the repository layout the cleaned data ships in, so a
//! zero-flag invocation from the repository root works out of the box. A
//! YAML file and CLI flags can override individual paths.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for one extract pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Root directory all relative paths resolve against
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Directory holding the cleaned per-period flight CSVs
    #[serde(default = "default_clean_dir")]
    pub clean_dir: PathBuf,

    /// Airport reference CSV candidates, checked in order
    #[serde(default = "default_airport_candidates")]
    pub airport_candidates: Vec<PathBuf>,

    /// Directory the JSON extracts are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_data_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_clean_dir() -> PathBuf {
    PathBuf::from("clean_data")
}

fn default_airport_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("other_data/airports.csv"),
        PathBuf::from("data/airports.csv"),
    ]
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("webpage_deliverable/data")
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            clean_dir: default_clean_dir(),
            airport_candidates: default_airport_candidates(),
            out_dir: default_out_dir(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve a configured path against the data root.
    ///
    /// Absolute paths pass through untouched.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_root.join(path)
        }
    }

    /// The clean-data directory, resolved against the data root
    pub fn clean_data_dir(&self) -> PathBuf {
        self.resolve(&self.clean_dir)
    }

    /// The airport reference candidates, resolved against the data root
    pub fn airport_paths(&self) -> Vec<PathBuf> {
        self.airport_candidates.iter().map(|p| self.resolve(p)).collect()
    }

    /// The output directory, resolved against the data root
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.out_dir)
    }
}
