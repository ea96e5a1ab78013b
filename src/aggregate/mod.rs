//! Aggregation stages
//!
//! The four extract builders plus the grouping machinery they share.
//! Grouping accumulates into ordered maps keyed by composite tuples, so
//! groups always emerge in ascending key order regardless of input order.
//! Ranking then sorts by passengers descending with a stable sort and keeps
//! the first N rows per group, so equal passenger counts keep their
//! pre-sort relative order and truncation is deterministic.

mod carriers;
mod market;
mod monthly;
mod routes;

#[cfg(test)]
mod tests;

pub use carriers::{build_carrier_rankings, CarrierRanking, TOP_CARRIERS_PER_ORIGIN};
pub use market::{build_market_share, MarketShareRow, OTHER_CARRIER, TOP_CARRIERS_PER_PERIOD};
pub use monthly::{build_monthly_metrics, MonthlyMetric};
pub use routes::{build_route_links, RouteAggregate, TOP_ROUTES_PER_PERIOD};

use crate::flights::FlightRecord;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Summed passenger/departure/seat volumes for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// Passengers transported
    pub passengers: f64,
    /// Departures performed
    pub departures: f64,
    /// Seats offered
    pub seats: f64,
}

impl Totals {
    /// Fold one record's volumes into the group
    pub fn add(&mut self, passengers: f64, departures: f64, seats: f64) {
        self.passengers += passengers;
        self.departures += departures;
        self.seats += seats;
    }

    /// Capacity utilization, `None` when no seats were offered
    #[must_use]
    pub fn load_factor(&self) -> Option<f64> {
        if self.seats == 0.0 {
            None
        } else {
            Some(self.passengers / self.seats)
        }
    }
}

/// Group-sum flight records into an ordered map.
///
/// The key closure decides the grouping; all three volume columns are
/// summed per group.
pub fn group_flights<'a, K, F, I>(records: I, mut key: F) -> BTreeMap<K, Totals>
where
    K: Ord,
    F: FnMut(&FlightRecord) -> K,
    I: IntoIterator<Item = &'a FlightRecord>,
{
    let mut groups: BTreeMap<K, Totals> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(
            record.passengers,
            record.departures_performed,
            record.seats,
        );
    }
    groups
}

/// Keep the first `limit` rows of every group, preserving input order.
///
/// Rows must already be sorted by the ranking criterion. Within a group the
/// first `limit` rows encountered survive, so with a stable descending sort
/// upstream this implements a first-occurrence rank cutoff.
pub fn retain_top_per_group<T, K, F>(rows: Vec<T>, limit: usize, mut group_key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    rows.into_iter()
        .filter(|row| {
            let rank = counts.entry(group_key(row)).or_insert(0);
            *rank += 1;
            *rank <= limit
        })
        .collect()
}
