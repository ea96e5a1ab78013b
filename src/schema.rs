//! Input column contracts
//!
//! The cleaned flight files and the airport reference file each carry a
//! fixed set of required columns. Headers are validated up front so a
//! malformed input fails with the offending file and column named, instead
//! of surfacing later as an opaque row-decode error.

use crate::error::{Error, Result};
use std::path::Path;

/// Columns every cleaned flight file must carry (extra columns are ignored)
pub const FLIGHT_COLUMNS: [&str; 8] = [
    "YEAR",
    "MONTH",
    "ORIGIN",
    "DEST",
    "UNIQUE_CARRIER_NAME",
    "PASSENGERS",
    "DEPARTURES_PERFORMED",
    "SEATS",
];

/// Columns the airport reference file must carry
pub const AIRPORT_COLUMNS: [&str; 7] = [
    "iata",
    "name",
    "city",
    "state",
    "country",
    "latitude",
    "longitude",
];

/// Check that `headers` contains every column in `required`.
///
/// Reports the first missing column; column order and extra columns do not
/// matter.
pub fn validate_headers(
    path: &Path,
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::schema_mismatch(path, *column));
        }
    }
    Ok(())
}
