#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weather forecast aggregation for named locations.
//!
//! Resolves a free-text place name to coordinates via the Open-Meteo
//! geocoding collaborator, fetches a multi-day daily forecast for those
//! coordinates, and zips the collaborator's parallel arrays into an
//! ordered series of displayable days with human-readable condition text.
//!
//! Both collaborator calls are single-attempt: a failure is surfaced
//! immediately rather than retried. Within one pipeline invocation
//! geocoding always completes before the forecast fetch begins.

pub mod conditions;
pub mod config;
pub mod forecast;
pub mod geocoding;
pub mod pipeline;

use chrono::NaiveDate;
use thiserror::Error;

/// Geographic coordinates (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// A place name resolved to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// The matched/canonical place label returned by the geocoder.
    pub label: Option<String>,
}

impl ResolvedLocation {
    /// Returns the coordinates of this location.
    #[must_use]
    pub const fn point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// One day of forecast data, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// Calendar date of this entry.
    pub date: NaiveDate,
    /// Minimum temperature in °C.
    pub temp_min: f64,
    /// Maximum temperature in °C.
    pub temp_max: f64,
    /// Precipitation total in mm.
    pub precipitation: f64,
    /// Human-readable condition description.
    pub condition: &'static str,
}

/// A resolved location together with its ordered daily forecast series.
///
/// The series is chronologically ordered with one entry per requested
/// day, no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Where the forecast applies.
    pub location: ResolvedLocation,
    /// One entry per day, in chronological order.
    pub days: Vec<DailyForecast>,
}

/// Errors from the weather aggregation chain.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP transport failure talking to a collaborator.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A collaborator returned a malformed or contract-violating payload.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The geocoder had no match for the requested place.
    #[error("No location found for '{place}'")]
    LocationNotFound {
        /// The place name that could not be resolved.
        place: String,
    },
}
