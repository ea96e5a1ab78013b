//! Airport reference table
//!
//! Loads the airport reference CSV (IATA code, location, coordinates) and
//! indexes it by upper-cased IATA code for the join and classification
//! stages. Duplicate codes keep the first occurrence, in input order.

use crate::error::{Error, Result};
use crate::schema::{validate_headers, AIRPORT_COLUMNS};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// One row of the airport reference table.
///
/// Everything but the IATA code is optional: reference data has gaps, and
/// downstream stages decide per field how to treat them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Airport {
    /// Three-letter IATA code
    pub iata: String,
    /// Airport name
    pub name: Option<String>,
    /// City served
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Country label, `USA` for domestic airports
    pub country: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
}

/// Airport reference table indexed by IATA code
#[derive(Debug, Default)]
pub struct AirportTable {
    by_iata: HashMap<String, Airport>,
}

impl AirportTable {
    /// Load the table from the first candidate path that exists.
    ///
    /// Fails with [`Error::MissingReferenceFile`] naming every candidate
    /// when none of them exists.
    pub fn load(candidates: &[PathBuf]) -> Result<Self> {
        let path = candidates
            .iter()
            .find(|p| p.is_file())
            .ok_or_else(|| Error::missing_reference(candidates))?;
        Self::from_csv(path)
    }

    /// Load the table from a specific CSV file
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        validate_headers(path, &headers, &AIRPORT_COLUMNS)?;

        let mut rows = Vec::new();
        for row in reader.deserialize() {
            let airport: Airport = row?;
            rows.push(airport);
        }

        let table = Self::from_records(rows);
        info!(
            "Loaded {} airports from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Build the table from in-memory rows, applying the same normalization
    /// as the CSV path: codes are upper-cased and the first occurrence of a
    /// duplicate code wins.
    pub fn from_records(records: impl IntoIterator<Item = Airport>) -> Self {
        let mut by_iata = HashMap::new();
        for mut airport in records {
            airport.iata = airport.iata.to_uppercase();
            by_iata.entry(airport.iata.clone()).or_insert(airport);
        }
        Self { by_iata }
    }

    /// Look up an airport by upper-cased IATA code
    #[must_use]
    pub fn get(&self, iata: &str) -> Option<&Airport> {
        self.by_iata.get(iata)
    }

    /// Country for an IATA code, when the code resolves and has one
    #[must_use]
    pub fn country_of(&self, iata: &str) -> Option<&str> {
        self.by_iata.get(iata).and_then(|a| a.country.as_deref())
    }

    /// Number of distinct airports in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_iata.len()
    }

    /// True when the table holds no airports
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_iata.is_empty()
    }
}
