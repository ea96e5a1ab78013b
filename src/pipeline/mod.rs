//! Pipeline orchestration
//!
//! Wires the loaders, the four aggregation stages, and the writer into one
//! synchronous, single-pass batch run: load everything, aggregate in
//! memory, write four JSON files. Input and schema errors surface before
//! the first write, so a failed run leaves previous extracts untouched.

mod types;


pub use types::{ExtractFile, RunSummary};

use crate::aggregate::{
    build_carrier_rankings, build_market_share, build_monthly_metrics, build_route_links,
};
use crate::airports::AirportTable;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::flights::load_flights;
use crate::output;
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;

/// Run the full extract pipeline with the given configuration.
///
/// Re-running over unchanged inputs reproduces byte-identical extracts.
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let start = Instant::now();

    let airports = AirportTable::load(&config.airport_paths())?;
    let flights = load_flights(&config.clean_data_dir())?;

    let routes = build_route_links(&flights, &airports)?;
    // One origin set for the whole run, taken from the surviving routes
    let origins: HashSet<String> = routes.iter().map(|r| r.origin.clone()).collect();
    let carriers = build_carrier_rankings(&flights, &origins);
    let monthly = build_monthly_metrics(&flights, &airports)?;
    let market_share = build_market_share(&flights, &airports);

    info!(
        "Aggregated {} route, {} carrier, {} monthly, {} market share rows",
        routes.len(),
        carriers.len(),
        monthly.len(),
        market_share.len()
    );

    let out_dir = config.output_dir();
    let summary = RunSummary {
        flow_links: ExtractFile::write(&out_dir, output::FLOW_LINKS_FILE, &routes)?,
        carriers_by_origin: ExtractFile::write(&out_dir, output::CARRIERS_FILE, &carriers)?,
        monthly_metrics: ExtractFile::write(&out_dir, output::MONTHLY_METRICS_FILE, &monthly)?,
        carrier_market_share: ExtractFile::write(
            &out_dir,
            output::MARKET_SHARE_FILE,
            &market_share,
        )?,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!("Pipeline finished in {} ms", summary.duration_ms);
    Ok(summary)
}
