//! Route aggregation
//!
//! Sums the flight set into year-month routes, joins airport metadata onto
//! both endpoints, classifies each route's sector, and keeps the top routes
//! per period by passenger volume.

use super::{group_flights, retain_top_per_group, Totals};
use crate::airports::AirportTable;
use crate::error::Result;
use crate::flights::FlightRecord;
use crate::geo::resolve_endpoints;
use crate::types::{month_name, Sector};
use serde::Serialize;
use tracing::debug;

/// Routes kept per (year, month) period
pub const TOP_ROUTES_PER_PERIOD: usize = 200;

/// One map-arc row: a directed year-month route with summed volumes and
/// endpoint metadata.
///
/// Directions are separate routes: JFK->LAX and LAX->JFK aggregate and rank
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAggregate {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Origin airport IATA code
    pub origin: String,
    /// Destination airport IATA code
    pub dest: String,
    /// Summed passengers
    pub passengers: f64,
    /// Summed departures
    pub departures: f64,
    /// Summed seats
    pub seats: f64,
    /// Passengers over seats, `null` when no seats were offered
    pub load_factor: Option<f64>,
    /// Full English month name
    pub month_name: String,
    /// Sector classification from the endpoint countries
    pub sector: Sector,
    /// Origin airport name
    pub o_name: Option<String>,
    /// Origin city
    pub o_city: Option<String>,
    /// Origin state
    pub o_state: Option<String>,
    /// Origin country
    pub o_country: Option<String>,
    /// Origin latitude
    pub o_latitude: Option<f64>,
    /// Origin longitude
    pub o_longitude: Option<f64>,
    /// Destination airport name
    pub d_name: Option<String>,
    /// Destination city
    pub d_city: Option<String>,
    /// Destination state
    pub d_state: Option<String>,
    /// Destination country
    pub d_country: Option<String>,
    /// Destination latitude
    pub d_latitude: Option<f64>,
    /// Destination longitude
    pub d_longitude: Option<f64>,
}

/// Build the top-N-per-period route rows for the map dataset.
///
/// Routes whose endpoints do not both resolve to an airport with a latitude
/// are dropped before ranking, so the per-period cut is taken over mappable
/// routes only. Output is ordered by passengers descending across all
/// periods, ties in ascending (year, month, origin, dest) order.
pub fn build_route_links(
    flights: &[FlightRecord],
    airports: &AirportTable,
) -> Result<Vec<RouteAggregate>> {
    let groups = group_flights(flights, |r| {
        (r.year, r.month, r.origin.clone(), r.dest.clone())
    });
    let total_routes = groups.len();

    // Ascending key order out of the grouping map is the tie order the
    // stable sort below preserves for equal passenger counts.
    let mut ranked: Vec<((i32, u32, String, String), Totals)> = groups.into_iter().collect();
    ranked.sort_by(|a, b| b.1.passengers.total_cmp(&a.1.passengers));

    let mut routes = Vec::with_capacity(ranked.len());
    for ((year, month, origin, dest), totals) in ranked {
        // Routes without resolvable coordinates cannot be drawn; drop them.
        let Some((o, d)) = resolve_endpoints(airports, &origin, &dest) else {
            continue;
        };

        routes.push(RouteAggregate {
            year,
            month,
            passengers: totals.passengers,
            departures: totals.departures,
            seats: totals.seats,
            load_factor: totals.load_factor(),
            month_name: month_name(month)?.to_string(),
            sector: Sector::classify(o.country.as_deref(), d.country.as_deref()),
            o_name: o.name.clone(),
            o_city: o.city.clone(),
            o_state: o.state.clone(),
            o_country: o.country.clone(),
            o_latitude: o.latitude,
            o_longitude: o.longitude,
            d_name: d.name.clone(),
            d_city: d.city.clone(),
            d_state: d.state.clone(),
            d_country: d.country.clone(),
            d_latitude: d.latitude,
            d_longitude: d.longitude,
            origin,
            dest,
        });
    }

    debug!(
        "{} of {} aggregated routes resolved against the airport table",
        routes.len(),
        total_routes
    );

    Ok(retain_top_per_group(
        routes,
        TOP_ROUTES_PER_PERIOD,
        |r| (r.year, r.month),
    ))
}
