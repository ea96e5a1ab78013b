//! Shared domain types
//!
//! Sector classification and calendar helpers used by the aggregation
//! stages.

use crate::error::{Error, Result};
use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country label that marks a domestic endpoint
pub const DOMESTIC_COUNTRY: &str = "USA";

/// Domestic/International/Unknown classification of a route's endpoints.
///
/// The variant order matters: when a sector is part of an ordered grouping
/// key it sorts in this declaration order, which matches the alphabetical
/// order of the serialized labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Sector {
    /// Both endpoints are in the USA
    Domestic,
    /// Both endpoint countries are known and at least one is not the USA
    International,
    /// At least one endpoint country could not be resolved
    Unknown,
}

impl Sector {
    /// Classify a pair of endpoint countries.
    ///
    /// The rules apply in order: both `USA` is `Domestic`, then any missing
    /// country is `Unknown`, everything else is `International`. A missing
    /// country paired with `USA` is therefore `Unknown`, not
    /// `International`.
    pub fn classify(origin_country: Option<&str>, dest_country: Option<&str>) -> Self {
        if origin_country == Some(DOMESTIC_COUNTRY) && dest_country == Some(DOMESTIC_COUNTRY) {
            return Self::Domestic;
        }
        if origin_country.is_none() || dest_country.is_none() {
            return Self::Unknown;
        }
        Self::International
    }

    /// The serialized label for this sector
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::International => "International",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full English month name for a 1-indexed month number
pub fn month_name(month: u32) -> Result<&'static str> {
    let m = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(Error::InvalidMonth { month })?;
    Ok(m.name())
}

/// First day of a year-month, used for ISO date serialization
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidMonth { month })
}
