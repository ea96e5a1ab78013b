//! JSON extract output
//!
//! Serializes each aggregate as a JSON array of row objects, one object per
//! row with field names as keys. The output directory is created on demand
//! and existing extracts are overwritten unconditionally, so re-running the
//! pipeline replaces the previous run's files.


use crate::error::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

// ============================================================================
// Extract filenames
// ============================================================================

/// Route links for the flow map
pub const FLOW_LINKS_FILE: &str = "flow_links.json";

/// Carrier rankings per origin
pub const CARRIERS_FILE: &str = "carriers_by_origin.json";

/// Monthly sector totals
pub const MONTHLY_METRICS_FILE: &str = "monthly_metrics.json";

/// Domestic carrier market share
pub const MARKET_SHARE_FILE: &str = "carrier_market_share.json";

/// Write `rows` to `path` as a JSON array of records.
///
/// Creates the parent directory when absent and replaces any existing file.
/// Returns the number of rows written.
pub fn write_records<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::output(format!(
                "failed to create output directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        Error::output(format!("failed to create {}: {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, rows)?;
    writer.flush()?;

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}
