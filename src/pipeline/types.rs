//! Pipeline run summary types

use crate::error::Result;
use crate::output::write_records;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One written extract: row count and destination path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractFile {
    /// Rows written to the file
    pub rows: usize,
    /// Where the extract landed
    pub path: PathBuf,
}

impl ExtractFile {
    /// Write `rows` to `name` under `out_dir` and record the result
    pub(crate) fn write<T: Serialize>(out_dir: &Path, name: &str, rows: &[T]) -> Result<Self> {
        let path = out_dir.join(name);
        let rows = write_records(&path, rows)?;
        Ok(Self { rows, path })
    }
}

/// Row counts and output paths from one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Route links for the flow map
    pub flow_links: ExtractFile,
    /// Carrier rankings per origin
    pub carriers_by_origin: ExtractFile,
    /// Monthly sector totals
    pub monthly_metrics: ExtractFile,
    /// Domestic carrier market share
    pub carrier_market_share: ExtractFile,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl RunSummary {
    /// The four extracts with display labels, in write order
    #[must_use]
    pub fn extracts(&self) -> [(&'static str, &ExtractFile); 4] {
        [
            ("Route links", &self.flow_links),
            ("Carrier rankings", &self.carriers_by_origin),
            ("Monthly metrics", &self.monthly_metrics),
            ("Market share", &self.carrier_market_share),
        ]
    }
}
