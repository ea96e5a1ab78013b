//! Tests for the aggregation stages

use super::*;
use crate::airports::{Airport, AirportTable};
use crate::flights::FlightRecord;
use crate::types::Sector;
use std::collections::HashSet;
use test_case::test_case;

// ============================================================================
// Fixtures
// ============================================================================

fn flight(
    year: i32,
    month: u32,
    origin: &str,
    dest: &str,
    carrier: &str,
    passengers: f64,
    departures: f64,
    seats: f64,
) -> FlightRecord {
    FlightRecord {
        year,
        month,
        origin: origin.to_string(),
        dest: dest.to_string(),
        carrier_name: carrier.to_string(),
        passengers,
        departures_performed: departures,
        seats,
    }
}

fn us_airport(iata: &str, latitude: f64, longitude: f64) -> Airport {
    Airport {
        iata: iata.to_string(),
        name: Some(format!("{iata} Intl")),
        city: Some(format!("{iata} City")),
        state: Some("ST".to_string()),
        country: Some("USA".to_string()),
        latitude: Some(latitude),
        longitude: Some(longitude),
    }
}

fn foreign_airport(iata: &str, country: &str) -> Airport {
    Airport {
        iata: iata.to_string(),
        name: Some(format!("{iata} Intl")),
        city: None,
        state: None,
        country: Some(country.to_string()),
        latitude: Some(1.0),
        longitude: Some(2.0),
    }
}

fn small_table() -> AirportTable {
    AirportTable::from_records(vec![
        us_airport("JFK", 40.6398, -73.7789),
        us_airport("LAX", 33.9425, -118.408),
        us_airport("ORD", 41.9786, -87.9048),
        foreign_airport("NRT", "Japan"),
    ])
}

// ============================================================================
// Totals and grouping machinery
// ============================================================================

#[test]
fn test_totals_accumulate() {
    let mut totals = Totals::default();
    totals.add(100.0, 1.0, 90.0);
    totals.add(50.0, 1.0, 90.0);
    assert_eq!(totals.passengers, 150.0);
    assert_eq!(totals.departures, 2.0);
    assert_eq!(totals.seats, 180.0);
}

#[test]
fn test_load_factor() {
    let mut totals = Totals::default();
    totals.add(150.0, 2.0, 180.0);
    assert_eq!(totals.load_factor(), Some(150.0 / 180.0));
}

#[test]
fn test_load_factor_none_without_seats() {
    let mut totals = Totals::default();
    totals.add(10.0, 1.0, 0.0);
    assert_eq!(totals.load_factor(), None);
}

#[test]
fn test_group_flights_sums_per_key() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "A", 100.0, 1.0, 90.0),
        flight(2024, 1, "JFK", "LAX", "B", 50.0, 1.0, 90.0),
        flight(2024, 2, "JFK", "LAX", "A", 70.0, 1.0, 90.0),
    ];
    let groups = group_flights(&flights, |r| (r.year, r.month));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&(2024, 1)].passengers, 150.0);
    assert_eq!(groups[&(2024, 2)].passengers, 70.0);
}

#[test]
fn test_retain_top_keeps_first_rows_per_group() {
    let rows = vec![("a", 3), ("a", 2), ("b", 9), ("a", 1), ("b", 8), ("b", 7)];
    let kept = retain_top_per_group(rows, 2, |r| r.0);
    assert_eq!(kept, vec![("a", 3), ("a", 2), ("b", 9), ("b", 8)]);
}

#[test]
fn test_retain_top_limit_larger_than_group() {
    let rows = vec![("a", 1), ("a", 2)];
    let kept = retain_top_per_group(rows, 10, |r| r.0);
    assert_eq!(kept.len(), 2);
}

// ============================================================================
// Route aggregation
// ============================================================================

#[test]
fn test_route_sums_and_metadata() {
    // Two segments on the same route and period collapse into one row
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 100.0, 5.0, 120.0),
        flight(2024, 1, "JFK", "LAX", "Carrier A", 50.0, 2.0, 60.0),
    ];
    let routes = build_route_links(&flights, &small_table()).unwrap();

    assert_eq!(routes.len(), 1);
    let r = &routes[0];
    assert_eq!(r.year, 2024);
    assert_eq!(r.month, 1);
    assert_eq!(r.origin, "JFK");
    assert_eq!(r.dest, "LAX");
    assert_eq!(r.passengers, 150.0);
    assert_eq!(r.departures, 7.0);
    assert_eq!(r.seats, 180.0);
    assert_eq!(r.load_factor, Some(150.0 / 180.0));
    assert_eq!(r.month_name, "January");
    assert_eq!(r.sector, Sector::Domestic);
    assert_eq!(r.o_name.as_deref(), Some("JFK Intl"));
    assert_eq!(r.o_city.as_deref(), Some("JFK City"));
    assert_eq!(r.o_latitude, Some(40.6398));
    assert_eq!(r.d_name.as_deref(), Some("LAX Intl"));
    assert_eq!(r.d_longitude, Some(-118.408));
}

#[test]
fn test_route_directions_stay_separate() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "A", 100.0, 1.0, 90.0),
        flight(2024, 1, "LAX", "JFK", "A", 80.0, 1.0, 90.0),
    ];
    let routes = build_route_links(&flights, &small_table()).unwrap();

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].origin, "JFK");
    assert_eq!(routes[0].passengers, 100.0);
    assert_eq!(routes[1].origin, "LAX");
    assert_eq!(routes[1].passengers, 80.0);
}

#[test]
fn test_route_international_sector() {
    let flights = vec![flight(2024, 1, "JFK", "NRT", "A", 200.0, 1.0, 250.0)];
    let routes = build_route_links(&flights, &small_table()).unwrap();
    assert_eq!(routes[0].sector, Sector::International);
    assert_eq!(routes[0].d_country.as_deref(), Some("Japan"));
}

#[test]
fn test_unresolved_routes_dropped() {
    let table = AirportTable::from_records(vec![
        us_airport("JFK", 40.6398, -73.7789),
        us_airport("LAX", 33.9425, -118.408),
        // In the table but unmappable
        Airport {
            latitude: None,
            ..us_airport("ZRH", 0.0, 0.0)
        },
    ]);
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "A", 100.0, 1.0, 90.0),
        flight(2024, 1, "JFK", "QQQ", "A", 300.0, 1.0, 400.0),
        flight(2024, 1, "JFK", "ZRH", "A", 300.0, 1.0, 400.0),
    ];
    let routes = build_route_links(&flights, &table).unwrap();

    // Only the fully resolvable route survives, regardless of volume
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].dest, "LAX");
}

#[test]
fn test_route_zero_seats_null_load_factor() {
    let flights = vec![flight(2024, 1, "JFK", "LAX", "A", 10.0, 1.0, 0.0)];
    let routes = build_route_links(&flights, &small_table()).unwrap();
    assert_eq!(routes[0].load_factor, None);
}

#[test]
fn test_route_cap_per_period() {
    // 250 distinct routes in one period, 3 in another
    let mut airports = vec![us_airport("HUB", 10.0, 20.0)];
    let mut flights = Vec::new();
    for i in 0..250 {
        let dest = format!("A{i:03}");
        airports.push(us_airport(&dest, 30.0, 40.0));
        flights.push(flight(2024, 1, "HUB", &dest, "A", f64::from(i + 1), 1.0, 300.0));
    }
    for dest in ["A000", "A001", "A002"] {
        flights.push(flight(2024, 2, "HUB", dest, "A", 5.0, 1.0, 300.0));
    }
    let table = AirportTable::from_records(airports);
    let routes = build_route_links(&flights, &table).unwrap();

    let january: Vec<_> = routes.iter().filter(|r| r.month == 1).collect();
    let february: Vec<_> = routes.iter().filter(|r| r.month == 2).collect();
    assert_eq!(january.len(), TOP_ROUTES_PER_PERIOD);
    assert_eq!(february.len(), 3);

    // The 50 lowest-volume January routes fell off
    let min_kept = january
        .iter()
        .map(|r| r.passengers)
        .fold(f64::INFINITY, f64::min);
    assert_eq!(min_kept, 51.0);
}

#[test]
fn test_routes_ordered_by_passengers_descending() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "A", 50.0, 1.0, 90.0),
        flight(2024, 2, "JFK", "LAX", "A", 200.0, 1.0, 250.0),
        flight(2024, 1, "LAX", "ORD", "A", 120.0, 1.0, 150.0),
    ];
    let routes = build_route_links(&flights, &small_table()).unwrap();

    let volumes: Vec<f64> = routes.iter().map(|r| r.passengers).collect();
    assert_eq!(volumes, vec![200.0, 120.0, 50.0]);
}

// ============================================================================
// Carrier rankings
// ============================================================================

fn origin_set(origins: &[&str]) -> HashSet<String> {
    origins.iter().map(ToString::to_string).collect()
}

#[test]
fn test_carriers_restricted_to_origin_set() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 100.0, 1.0, 90.0),
        flight(2024, 1, "ORD", "LAX", "Carrier B", 500.0, 1.0, 600.0),
    ];
    let rankings = build_carrier_rankings(&flights, &origin_set(&["JFK"]));

    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].origin, "JFK");
    assert_eq!(rankings[0].carrier_name, "Carrier A");
}

#[test]
fn test_carriers_sum_over_dests() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 100.0, 1.0, 90.0),
        flight(2024, 1, "JFK", "ORD", "Carrier A", 40.0, 2.0, 60.0),
    ];
    let rankings = build_carrier_rankings(&flights, &origin_set(&["JFK"]));

    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].passengers, 140.0);
    assert_eq!(rankings[0].departures, 3.0);
    assert_eq!(rankings[0].seats, 150.0);
}

#[test]
fn test_carriers_capped_per_origin_period() {
    let mut flights = Vec::new();
    for i in 0..14 {
        let carrier = format!("Carrier {i:02}");
        flights.push(flight(2024, 1, "JFK", "LAX", &carrier, f64::from(100 - i), 1.0, 200.0));
    }
    let rankings = build_carrier_rankings(&flights, &origin_set(&["JFK"]));

    assert_eq!(rankings.len(), TOP_CARRIERS_PER_ORIGIN);
    // The two lowest-volume carriers fell off
    assert!(!rankings.iter().any(|r| r.carrier_name == "Carrier 12"));
    assert!(!rankings.iter().any(|r| r.carrier_name == "Carrier 13"));
}

#[test]
fn test_carrier_ties_keep_first_occurrence() {
    // 13 carriers with identical volumes; the rank cutoff must keep the 12
    // that sort first in the pre-rank (ascending carrier name) order.
    let mut flights = Vec::new();
    for i in 0..13 {
        let carrier = format!("Carrier {i:02}");
        flights.push(flight(2024, 1, "JFK", "LAX", &carrier, 50.0, 1.0, 80.0));
    }
    let rankings = build_carrier_rankings(&flights, &origin_set(&["JFK"]));

    assert_eq!(rankings.len(), 12);
    assert!(rankings.iter().any(|r| r.carrier_name == "Carrier 00"));
    assert!(rankings.iter().any(|r| r.carrier_name == "Carrier 11"));
    assert!(!rankings.iter().any(|r| r.carrier_name == "Carrier 12"));
}

#[test]
fn test_carrier_membership_spans_periods() {
    // JFK is in the origin set; its rows rank in every period, even one
    // where it would not have made the route cut on its own.
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 1000.0, 1.0, 1200.0),
        flight(2024, 2, "JFK", "LAX", "Carrier A", 1.0, 1.0, 200.0),
    ];
    let rankings = build_carrier_rankings(&flights, &origin_set(&["JFK"]));

    assert_eq!(rankings.len(), 2);
    assert!(rankings.iter().any(|r| r.month == 2));
}

// ============================================================================
// Monthly metrics
// ============================================================================

#[test]
fn test_monthly_sector_split() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "A", 100.0, 1.0, 120.0),
        flight(2024, 1, "LAX", "JFK", "A", 80.0, 1.0, 120.0),
        flight(2024, 1, "JFK", "NRT", "A", 200.0, 1.0, 250.0),
        // Unknown airport: counted, classified Unknown
        flight(2024, 1, "JFK", "QQQ", "A", 30.0, 1.0, 50.0),
    ];
    let metrics = build_monthly_metrics(&flights, &small_table()).unwrap();

    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0].sector, Sector::Domestic);
    assert_eq!(metrics[0].passengers, 180.0);
    assert_eq!(metrics[1].sector, Sector::International);
    assert_eq!(metrics[1].passengers, 200.0);
    assert_eq!(metrics[2].sector, Sector::Unknown);
    assert_eq!(metrics[2].passengers, 30.0);
}

#[test]
fn test_monthly_rows_in_period_order() {
    let flights = vec![
        flight(2024, 2, "JFK", "LAX", "A", 10.0, 1.0, 20.0),
        flight(2023, 12, "JFK", "LAX", "A", 10.0, 1.0, 20.0),
        flight(2024, 1, "JFK", "NRT", "A", 10.0, 1.0, 20.0),
    ];
    let metrics = build_monthly_metrics(&flights, &small_table()).unwrap();

    let periods: Vec<(i32, u32)> = metrics.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(periods, vec![(2023, 12), (2024, 1), (2024, 2)]);
}

#[test]
fn test_monthly_date_is_first_of_month() {
    let flights = vec![flight(2024, 3, "JFK", "LAX", "A", 10.0, 1.0, 20.0)];
    let metrics = build_monthly_metrics(&flights, &small_table()).unwrap();
    assert_eq!(metrics[0].date.to_string(), "2024-03-01");
}

#[test]
fn test_monthly_zero_seats_null_load_factor() {
    let flights = vec![flight(2024, 1, "JFK", "LAX", "A", 10.0, 1.0, 0.0)];
    let metrics = build_monthly_metrics(&flights, &small_table()).unwrap();
    assert_eq!(metrics[0].load_factor, None);
}

#[test]
fn test_monthly_invalid_month_rejected() {
    let flights = vec![flight(2024, 13, "JFK", "LAX", "A", 10.0, 1.0, 20.0)];
    let err = build_monthly_metrics(&flights, &small_table()).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidMonth { month: 13 }));
}

// ============================================================================
// Market share
// ============================================================================

#[test]
fn test_market_share_folds_tail_into_other() {
    // Eleven carriers, 1100 down to 100 passengers
    let mut flights = Vec::new();
    for i in 0..11 {
        let carrier = format!("Carrier {i:02}");
        flights.push(flight(
            2024,
            1,
            "JFK",
            "LAX",
            &carrier,
            f64::from((11 - i) * 100),
            1.0,
            2000.0,
        ));
    }
    let rows = build_market_share(&flights, &small_table());

    assert_eq!(rows.len(), 11);
    let other = rows.last().unwrap();
    assert_eq!(other.carrier_name, OTHER_CARRIER);
    assert_eq!(other.passengers, 100.0);

    let total: f64 = rows.iter().map(|r| r.passengers).sum();
    assert_eq!(total, 6600.0);
    let share_sum: f64 = rows.iter().map(|r| r.market_share).sum();
    assert!((share_sum - 1.0).abs() < 1e-9);
    assert!((other.market_share - 100.0 / 6600.0).abs() < 1e-12);
}

#[test_case(3 => 3 ; "below the cap")]
#[test_case(10 => 10 ; "exactly at the cap")]
#[test_case(11 => 11 ; "one over folds into other")]
#[test_case(15 => 11 ; "long tail folds into other")]
fn test_market_share_row_count(carrier_count: u32) -> usize {
    let flights: Vec<FlightRecord> = (0..carrier_count)
        .map(|i| {
            flight(
                2024,
                1,
                "JFK",
                "LAX",
                &format!("Carrier {i:02}"),
                f64::from((carrier_count - i) * 10),
                1.0,
                500.0,
            )
        })
        .collect();
    build_market_share(&flights, &small_table()).len()
}

#[test]
fn test_market_share_no_other_at_cap() {
    let flights: Vec<FlightRecord> = (0..10)
        .map(|i| {
            flight(2024, 1, "JFK", "LAX", &format!("C{i}"), 100.0, 1.0, 500.0)
        })
        .collect();
    let rows = build_market_share(&flights, &small_table());
    assert!(!rows.iter().any(|r| r.carrier_name == OTHER_CARRIER));
}

#[test]
fn test_market_share_strictly_domestic() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 100.0, 1.0, 120.0),
        // International and unknown endpoints are excluded outright
        flight(2024, 1, "JFK", "NRT", "Carrier A", 500.0, 1.0, 600.0),
        flight(2024, 1, "JFK", "QQQ", "Carrier A", 700.0, 1.0, 800.0),
    ];
    let rows = build_market_share(&flights, &small_table());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].passengers, 100.0);
    assert!((rows[0].market_share - 1.0).abs() < 1e-12);
}

#[test]
fn test_market_share_zero_total() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Carrier A", 0.0, 1.0, 100.0),
        flight(2024, 1, "JFK", "LAX", "Carrier B", 0.0, 1.0, 100.0),
    ];
    let rows = build_market_share(&flights, &small_table());

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.market_share == 0.0));
}

#[test]
fn test_market_share_periods_ascending() {
    let flights = vec![
        flight(2024, 2, "JFK", "LAX", "Carrier A", 10.0, 1.0, 20.0),
        flight(2024, 1, "JFK", "LAX", "Carrier A", 10.0, 1.0, 20.0),
    ];
    let rows = build_market_share(&flights, &small_table());

    let periods: Vec<(i32, u32)> = rows.iter().map(|r| (r.year, r.month)).collect();
    assert_eq!(periods, vec![(2024, 1), (2024, 2)]);
}

#[test]
fn test_market_share_rank_order_within_period() {
    let flights = vec![
        flight(2024, 1, "JFK", "LAX", "Small", 10.0, 1.0, 20.0),
        flight(2024, 1, "JFK", "LAX", "Big", 90.0, 1.0, 100.0),
    ];
    let rows = build_market_share(&flights, &small_table());

    assert_eq!(rows[0].carrier_name, "Big");
    assert_eq!(rows[1].carrier_name, "Small");
    assert!((rows[0].market_share - 0.9).abs() < 1e-12);
}
