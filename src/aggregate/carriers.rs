//! Carrier rankings per origin
//!
//! For every origin that survived the route cut, ranks the carriers
//! departing it in each period by passenger volume.

use super::{group_flights, retain_top_per_group};
use crate::flights::FlightRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Carriers kept per (year, month, origin) group
pub const TOP_CARRIERS_PER_ORIGIN: usize = 12;

/// One carrier's summed volumes out of one origin in one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierRanking {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Origin airport IATA code
    pub origin: String,
    /// Full carrier name
    pub carrier_name: String,
    /// Summed passengers
    pub passengers: f64,
    /// Summed departures
    pub departures: f64,
    /// Summed seats
    pub seats: f64,
}

/// Build per-origin carrier rankings, restricted to `origins`.
///
/// `origins` is the cross-period set of origins appearing in the surviving
/// route rows: an origin that made the cut in any one period stays eligible
/// in every period. Output is ordered by passengers descending across all
/// groups, ties in ascending (year, month, origin, carrier) order.
pub fn build_carrier_rankings(
    flights: &[FlightRecord],
    origins: &HashSet<String>,
) -> Vec<CarrierRanking> {
    let groups = group_flights(
        flights.iter().filter(|r| origins.contains(&r.origin)),
        |r| (r.year, r.month, r.origin.clone(), r.carrier_name.clone()),
    );

    let mut ranked: Vec<_> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.passengers.total_cmp(&a.1.passengers));

    let rankings: Vec<CarrierRanking> = ranked
        .into_iter()
        .map(|((year, month, origin, carrier_name), totals)| CarrierRanking {
            year,
            month,
            origin,
            carrier_name,
            passengers: totals.passengers,
            departures: totals.departures,
            seats: totals.seats,
        })
        .collect();

    retain_top_per_group(rankings, TOP_CARRIERS_PER_ORIGIN, |r| {
        (r.year, r.month, r.origin.clone())
    })
}
