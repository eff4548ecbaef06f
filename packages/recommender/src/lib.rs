#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crop recommendation pipeline.
//!
//! Turns seven raw agronomic measurements into a crop recommendation via
//! a fixed chain: validate → scale ([`scaler::ScalerChain`]) → classify
//! ([`classifier::Classifier`]) → resolve against the crop catalog.
//!
//! The scaler and classifier consume pre-fitted parameters baked in at
//! build time (see [`artifact`]); no model loading or training happens at
//! runtime. The pipeline boundary ([`pipeline::Recommender`]) converts
//! every internal failure into a fully populated result object, so
//! callers always receive something displayable.

pub mod artifact;
pub mod classifier;
pub mod pipeline;
pub mod scaler;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::artifact::FEATURE_COUNT;

/// Field names in vector order, used for diagnostics.
pub const FIELD_NAMES: [&str; FEATURE_COUNT] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// The seven agronomic measurements a recommendation is computed from.
///
/// Field order is load-bearing: the fitted parameter tables in
/// [`artifact`] are indexed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Soil nitrogen content ratio.
    pub nitrogen: f64,
    /// Soil phosphorus content ratio.
    pub phosphorus: f64,
    /// Soil potassium content ratio.
    pub potassium: f64,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in mm.
    pub rainfall: f64,
}

impl FeatureVector {
    /// Builds a vector from the seven measurements in field order.
    #[must_use]
    pub const fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Builds a vector from a slice in field order.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::WrongArity`] unless the slice holds
    /// exactly seven values.
    pub fn from_slice(values: &[f64]) -> Result<Self, RecommendError> {
        match values {
            &[nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall] => Ok(
                Self::new(nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall),
            ),
            _ => Err(RecommendError::WrongArity {
                expected: FEATURE_COUNT,
                actual: values.len(),
            }),
        }
    }

    /// Returns the measurements as an array in field order.
    #[must_use]
    pub const fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }

    /// Checks that every field holds a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NonFinite`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), RecommendError> {
        for (value, field) in self.values().into_iter().zip(FIELD_NAMES) {
            if !value.is_finite() {
                return Err(RecommendError::NonFinite { field });
            }
        }
        Ok(())
    }
}

/// A feature vector after the two-stage scaling chain.
///
/// Derived data with no identity of its own; it exists only to be handed
/// to the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledVector([f64; FEATURE_COUNT]);

impl ScaledVector {
    pub(crate) const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Returns the scaled values in field order.
    #[must_use]
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// The outcome of a recommendation request.
///
/// Always fully populated: failure paths carry the diagnostic message and
/// the default catalog entry instead of leaving fields empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Whether a crop could be determined.
    pub success: bool,
    /// Human-readable outcome or diagnostic message.
    pub message: String,
    /// Recommended crop name, or `"default"` when none was determined.
    pub crop: String,
    /// Image filename for the recommended crop.
    pub image_key: String,
}

/// Errors from validating or scaling a feature vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The input did not contain exactly seven values.
    #[error("expected {expected} feature values, got {actual}")]
    WrongArity {
        /// Number of fields a vector must hold.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A required measurement was absent from the request.
    #[error("missing value for {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A measurement was NaN or infinite.
    #[error("non-finite value for {field}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}
