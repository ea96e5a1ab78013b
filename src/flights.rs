//! Flight record loading
//!
//! Discovers every cleaned per-period flight CSV under the data directory
//! and concatenates them, in sorted filename order, into one in-memory
//! record set. Period filenames embed the period, so sorted order is
//! chronological order.

use crate::error::{Error, Result};
use crate::schema::{validate_headers, FLIGHT_COLUMNS};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Filename pattern the loader accepts
pub const FLIGHT_FILE_PATTERN: &str = "flights_*_clean.csv";

static FLIGHT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^flights_.*_clean\.csv$").unwrap());

/// One cleaned flight segment row.
///
/// Volumes are `f64` because the upstream cleaning step writes them as
/// floats; sums and ratios stay in floating point all the way to the JSON
/// output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    /// Calendar year
    #[serde(rename = "YEAR")]
    pub year: i32,
    /// Calendar month, 1-12
    #[serde(rename = "MONTH")]
    pub month: u32,
    /// Origin airport IATA code
    #[serde(rename = "ORIGIN")]
    pub origin: String,
    /// Destination airport IATA code
    #[serde(rename = "DEST")]
    pub dest: String,
    /// Full carrier name
    #[serde(rename = "UNIQUE_CARRIER_NAME")]
    pub carrier_name: String,
    /// Passengers transported
    #[serde(rename = "PASSENGERS")]
    pub passengers: f64,
    /// Departures performed
    #[serde(rename = "DEPARTURES_PERFORMED")]
    pub departures_performed: f64,
    /// Seats offered
    #[serde(rename = "SEATS")]
    pub seats: f64,
}

/// Load and concatenate every cleaned flight file under `dir`.
///
/// Files are read in sorted filename order. Fails with
/// [`Error::MissingDataDirectory`] when `dir` is not a directory and
/// [`Error::NoInputFiles`] when it holds no matching file.
pub fn load_flights(dir: &Path) -> Result<Vec<FlightRecord>> {
    if !dir.is_dir() {
        return Err(Error::MissingDataDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| FLIGHT_FILE.is_match(name))
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(Error::NoInputFiles {
            dir: dir.to_path_buf(),
            pattern: FLIGHT_FILE_PATTERN.to_string(),
        });
    }

    let mut records = Vec::new();
    for path in &paths {
        let before = records.len();
        read_flight_file(path, &mut records)?;
        debug!("{}: {} rows", path.display(), records.len() - before);
    }

    info!(
        "Loaded {} flight records from {} files",
        records.len(),
        paths.len()
    );
    Ok(records)
}

/// Read one cleaned flight CSV and append its rows to `out`
fn read_flight_file(path: &Path, out: &mut Vec<FlightRecord>) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    validate_headers(path, &headers, &FLIGHT_COLUMNS)?;

    for row in reader.deserialize() {
        let mut record: FlightRecord = row?;
        record.origin = record.origin.to_uppercase();
        record.dest = record.dest.to_uppercase();
        out.push(record);
    }
    Ok(())
}
