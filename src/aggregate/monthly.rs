//! Monthly sector totals
//!
//! Sums the full flight set into one row per (year, month, sector) for the
//! trend charts. Unlike the map dataset there is no geo filter here: a
//! record with an unresolvable airport still counts, it just classifies as
//! Unknown.

use super::group_flights;
use crate::airports::AirportTable;
use crate::error::Result;
use crate::flights::FlightRecord;
use crate::types::{first_of_month, Sector};
use chrono::NaiveDate;
use serde::Serialize;

/// Summed volumes for one (year, month, sector) group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyMetric {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Sector classification
    pub sector: Sector,
    /// Summed passengers
    pub passengers: f64,
    /// Summed departures
    pub departures: f64,
    /// Summed seats
    pub seats: f64,
    /// Passengers over seats, `null` when no seats were offered
    pub load_factor: Option<f64>,
    /// First day of the month, serialized as an ISO date
    pub date: NaiveDate,
}

/// Build year-month-sector totals over the full flight set.
///
/// Output is ordered by (year, month) ascending, sectors in
/// Domestic/International/Unknown order within a month.
pub fn build_monthly_metrics(
    flights: &[FlightRecord],
    airports: &AirportTable,
) -> Result<Vec<MonthlyMetric>> {
    let groups = group_flights(flights, |r| {
        let sector = Sector::classify(
            airports.country_of(&r.origin),
            airports.country_of(&r.dest),
        );
        (r.year, r.month, sector)
    });

    // The grouping map already iterates in (year, month, sector) order.
    groups
        .into_iter()
        .map(|((year, month, sector), totals)| {
            Ok(MonthlyMetric {
                year,
                month,
                sector,
                passengers: totals.passengers,
                departures: totals.departures,
                seats: totals.seats,
                load_factor: totals.load_factor(),
                date: first_of_month(year, month)?,
            })
        })
        .collect()
}
