#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the crop advisor server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the core pipeline types to allow independent evolution of the API
//! contract.

use chrono::NaiveDate;
use crop_advisor_recommender::{FeatureVector, RecommendError, RecommendationResult, FIELD_NAMES};
use crop_advisor_weather::{DailyForecast, Forecast};
use serde::{Deserialize, Serialize};

/// A recommendation request body.
///
/// Every measurement is optional at the wire level so the handler can
/// name the missing ones; a request with fewer than seven populated
/// fields is rejected by [`RecommendRequest::feature_vector`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Soil nitrogen content ratio.
    pub nitrogen: Option<f64>,
    /// Soil phosphorus content ratio.
    pub phosphorus: Option<f64>,
    /// Soil potassium content ratio.
    pub potassium: Option<f64>,
    /// Air temperature in °C.
    pub temperature: Option<f64>,
    /// Relative humidity in %.
    pub humidity: Option<f64>,
    /// Soil pH.
    pub ph: Option<f64>,
    /// Rainfall in mm.
    pub rainfall: Option<f64>,
}

impl RecommendRequest {
    /// Builds the measurement vector from the request.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::MissingField`] naming the first absent
    /// measurement.
    pub fn feature_vector(&self) -> Result<FeatureVector, RecommendError> {
        let fields = [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ];

        let mut values = [0.0; 7];
        for (i, (value, field)) in fields.into_iter().zip(FIELD_NAMES).enumerate() {
            values[i] = value.ok_or(RecommendError::MissingField { field })?;
        }

        FeatureVector::from_slice(&values)
    }
}

/// A crop recommendation as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecommendation {
    /// Whether a crop could be determined.
    pub success: bool,
    /// Human-readable outcome or diagnostic message.
    pub message: String,
    /// Recommended crop name, or `"default"`.
    pub crop: String,
    /// Image filename for the recommended crop.
    pub image_key: String,
}

impl From<RecommendationResult> for ApiRecommendation {
    fn from(result: RecommendationResult) -> Self {
        Self {
            success: result.success,
            message: result.message,
            crop: result.crop,
            image_key: result.image_key,
        }
    }
}

/// Query parameters for the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQueryParams {
    /// Free-text place name to resolve.
    pub city: String,
    /// Number of days to forecast; defaults to the configured horizon.
    pub days: Option<u8>,
}

/// One forecast day as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForecastDay {
    /// Calendar date of this entry.
    pub date: NaiveDate,
    /// Minimum temperature in °C.
    pub temp_min: f64,
    /// Maximum temperature in °C.
    pub temp_max: f64,
    /// Precipitation total in mm.
    pub precipitation: f64,
    /// Human-readable condition description.
    pub condition: String,
}

impl From<DailyForecast> for ApiForecastDay {
    fn from(day: DailyForecast) -> Self {
        Self {
            date: day.date,
            temp_min: day.temp_min,
            temp_max: day.temp_max,
            precipitation: day.precipitation,
            condition: day.condition.to_string(),
        }
    }
}

/// A forecast response: either a populated series or an error message
/// with zero rows. Never partially filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiForecast {
    /// Whether the lookup succeeded.
    pub success: bool,
    /// Diagnostic message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Matched place label, when resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// One entry per day; empty on failure.
    pub days: Vec<ApiForecastDay>,
}

impl ApiForecast {
    /// Builds a failure response carrying only the diagnostic message.
    #[must_use]
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            location: None,
            days: Vec::new(),
        }
    }
}

impl From<Forecast> for ApiForecast {
    fn from(forecast: Forecast) -> Self {
        Self {
            success: true,
            message: None,
            location: forecast.location.label,
            days: forecast.days.into_iter().map(ApiForecastDay::from).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn full_request() -> RecommendRequest {
        RecommendRequest {
            nitrogen: Some(90.0),
            phosphorus: Some(42.0),
            potassium: Some(43.0),
            temperature: Some(20.88),
            humidity: Some(82.0),
            ph: Some(6.5),
            rainfall: Some(202.94),
        }
    }

    #[test]
    fn full_request_builds_vector() {
        let vector = full_request().feature_vector().unwrap();
        assert_eq!(
            vector.values(),
            [90.0, 42.0, 43.0, 20.88, 82.0, 6.5, 202.94]
        );
    }

    #[test]
    fn missing_field_is_named() {
        let mut request = full_request();
        request.humidity = None;
        assert_eq!(
            request.feature_vector(),
            Err(RecommendError::MissingField { field: "humidity" })
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let mut request = full_request();
        request.phosphorus = None;
        request.rainfall = None;
        assert_eq!(
            request.feature_vector(),
            Err(RecommendError::MissingField {
                field: "phosphorus"
            })
        );
    }

    #[test]
    fn error_forecast_has_no_rows() {
        let response = ApiForecast::error("No location found".to_string());
        assert!(!response.success);
        assert!(response.days.is_empty());
        assert!(response.location.is_none());
    }
}
