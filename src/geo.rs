//! Geo join
//!
//! Resolves a route's endpoints against the airport table so their metadata
//! can be copied onto route rows. A route survives only when both endpoints
//! resolve to an airport with a latitude; unresolved routes are dropped
//! silently, as a data-quality filter rather than an error. Only latitude
//! is checked, a row with a latitude but no longitude still resolves.

use crate::airports::{Airport, AirportTable};

/// Resolve both endpoints of a route for the map dataset.
///
/// Returns `None` when either code is absent from the table or resolves to
/// an airport without a latitude.
pub fn resolve_endpoints<'a>(
    airports: &'a AirportTable,
    origin: &str,
    dest: &str,
) -> Option<(&'a Airport, &'a Airport)> {
    let o = airports.get(origin).filter(|a| a.latitude.is_some())?;
    let d = airports.get(dest).filter(|a| a.latitude.is_some())?;
    Some((o, d))
}
