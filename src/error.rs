//! Error types for the extract pipeline
//!
//! This module defines the main `Error` enum used throughout the crate.
//! All public APIs return `Result<T, Error>`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the extract pipeline
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Input discovery errors
    // ========================================================================
    /// Airport reference file not found at any candidate path
    #[error("airport reference file not found (tried: {tried})")]
    MissingReferenceFile {
        /// Candidate paths that were checked, comma separated
        tried: String,
    },

    /// Cleaned flight data directory does not exist
    #[error("flight data directory not found: {}", .path.display())]
    MissingDataDirectory {
        /// The directory that was expected to exist
        path: PathBuf,
    },

    /// Data directory exists but holds no matching flight files
    #[error("no files matching '{pattern}' in {}", .dir.display())]
    NoInputFiles {
        /// The directory that was scanned
        dir: PathBuf,
        /// The filename pattern that matched nothing
        pattern: String,
    },

    // ========================================================================
    // Schema errors
    // ========================================================================
    /// An input file is missing a required column
    #[error("{}: required column '{column}' is missing", .path.display())]
    SchemaMismatch {
        /// The offending input file
        path: PathBuf,
        /// The first required column not found in the header row
        column: String,
    },

    /// A month value outside 1..=12 reached a calendar conversion
    #[error("month {month} is outside 1..=12")]
    InvalidMonth {
        /// The rejected month number
        month: u32,
    },

    /// CSV parse or decode error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ========================================================================
    // Configuration errors
    // ========================================================================
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ========================================================================
    // Output errors
    // ========================================================================
    /// Output write error
    #[error("Output error: {message}")]
    Output {
        /// Error message
        message: String,
    },

    /// JSON serialization error
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic errors
    // ========================================================================
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped anyhow error
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a missing-reference-file error from the candidate paths
    pub fn missing_reference(candidates: &[PathBuf]) -> Self {
        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::MissingReferenceFile { tried }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            column: column.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
