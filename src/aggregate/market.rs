//! Domestic carrier market share
//!
//! Sums strictly-domestic passengers per carrier and month, keeps the top
//! carriers per period and folds the rest into a synthetic "Other" row, so
//! every period's shares sum to one.

use super::group_flights;
use crate::airports::AirportTable;
use crate::flights::FlightRecord;
use crate::types::DOMESTIC_COUNTRY;
use serde::Serialize;
use std::collections::BTreeMap;

/// Named carriers kept per period before the long tail folds into one row
pub const TOP_CARRIERS_PER_PERIOD: usize = 10;

/// Synthetic carrier name for the folded long tail
pub const OTHER_CARRIER: &str = "Other";

/// One carrier's share of domestic passengers in one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShareRow {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Full carrier name, or `Other` for the folded tail
    pub carrier_name: String,
    /// Summed domestic passengers
    pub passengers: f64,
    /// Fraction of the period's domestic passengers, 0 when the period
    /// total is zero
    pub market_share: f64,
}

/// Build monthly domestic market share rows.
///
/// Strictly domestic: both endpoints must resolve to a USA airport, so a
/// record with an unknown airport or country is excluded here rather than
/// counted as Unknown. Periods are emitted in ascending (year, month)
/// order; within a period, rows follow passenger rank with "Other" last.
pub fn build_market_share(
    flights: &[FlightRecord],
    airports: &AirportTable,
) -> Vec<MarketShareRow> {
    let domestic = flights.iter().filter(|r| {
        airports.country_of(&r.origin) == Some(DOMESTIC_COUNTRY)
            && airports.country_of(&r.dest) == Some(DOMESTIC_COUNTRY)
    });

    let groups = group_flights(domestic, |r| (r.year, r.month, r.carrier_name.clone()));

    // Regroup by period; carriers arrive in ascending name order, which is
    // the tie order the stable sort below preserves.
    let mut periods: BTreeMap<(i32, u32), Vec<(String, f64)>> = BTreeMap::new();
    for ((year, month, carrier), totals) in groups {
        periods
            .entry((year, month))
            .or_default()
            .push((carrier, totals.passengers));
    }

    let mut rows = Vec::new();
    for ((year, month), mut carriers) in periods {
        carriers.sort_by(|a, b| b.1.total_cmp(&a.1));

        let other = if carriers.len() > TOP_CARRIERS_PER_PERIOD {
            let tail_total: f64 = carriers[TOP_CARRIERS_PER_PERIOD..]
                .iter()
                .map(|(_, passengers)| passengers)
                .sum();
            carriers.truncate(TOP_CARRIERS_PER_PERIOD);
            Some((OTHER_CARRIER.to_string(), tail_total))
        } else {
            None
        };
        carriers.extend(other);

        let period_total: f64 = carriers.iter().map(|(_, passengers)| passengers).sum();
        for (carrier_name, passengers) in carriers {
            let market_share = if period_total == 0.0 {
                0.0
            } else {
                passengers / period_total
            };
            rows.push(MarketShareRow {
                year,
                month,
                carrier_name,
                passengers,
                market_share,
            });
        }
    }

    rows
}
