//! The recommendation pipeline boundary.
//!
//! Orchestrates validate → scale → classify → catalog resolution and
//! converts every internal failure into a fully populated
//! [`RecommendationResult`]. Nothing raises past this boundary.

use crop_advisor_crop_models::{resolve, CatalogEntry, Crop};

use crate::classifier::Classifier;
use crate::scaler::ScalerChain;
use crate::{FeatureVector, RecommendError, RecommendationResult};

/// Message shown when the classifier produced a label the catalog does
/// not know.
const UNMAPPED_MESSAGE: &str =
    "Sorry, we could not determine the best crop to be cultivated with the provided data.";

/// The crop recommendation pipeline.
///
/// Holds the fitted scaler and classifier; construct once at process
/// start and share read-only across requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    scaler: ScalerChain,
    classifier: Classifier,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::fitted()
    }
}

impl Recommender {
    /// Builds the pipeline from the baked fitted artifacts.
    #[must_use]
    pub fn fitted() -> Self {
        let scaler = ScalerChain::fitted();
        let classifier = Classifier::fitted(&scaler);
        Self { scaler, classifier }
    }

    /// Produces a recommendation for the given measurements.
    ///
    /// Never fails: validation and scaling errors are converted into a
    /// result object carrying the diagnostic message and the default
    /// catalog entry. Calling twice with the same vector yields the same
    /// result.
    #[must_use]
    pub fn recommend(&self, vector: &FeatureVector) -> RecommendationResult {
        log::debug!(
            "Received input: N={}, P={}, K={}, temp={}, humidity={}, ph={}, rainfall={}",
            vector.nitrogen,
            vector.phosphorus,
            vector.potassium,
            vector.temperature,
            vector.humidity,
            vector.ph,
            vector.rainfall
        );

        match self.scaler.scale(vector) {
            Ok(scaled) => {
                let label = self.classifier.classify(&scaled);
                log::debug!("Prediction: {label}");
                Self::present(label)
            }
            Err(e) => {
                log::error!("Recommendation failed: {e}");
                failure(&format!("An error occurred: {e}"))
            }
        }
    }

    /// Formats a classifier label as a displayable result.
    fn present(label: i32) -> RecommendationResult {
        let entry = resolve(label);
        if Crop::from_label(label).is_some() {
            RecommendationResult {
                success: true,
                message: format!("{} is the best crop to be cultivated right there", entry.crop),
                crop: entry.crop,
                image_key: entry.image_key,
            }
        } else {
            // Unmapped label: not an error, but no crop claim is made.
            RecommendationResult {
                success: false,
                message: UNMAPPED_MESSAGE.to_string(),
                crop: entry.crop,
                image_key: entry.image_key,
            }
        }
    }
}

/// Builds a failure result from a diagnostic message and the default
/// catalog entry.
#[must_use]
pub fn failure(message: &str) -> RecommendationResult {
    let entry = CatalogEntry::default_entry();
    RecommendationResult {
        success: false,
        message: message.to_string(),
        crop: entry.crop,
        image_key: entry.image_key,
    }
}

/// Converts a validation error into the standard failure result.
#[must_use]
pub fn failure_from_error(error: &RecommendError) -> RecommendationResult {
    failure(&format!("An error occurred: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector::new(80.0, 47.0, 40.0, 23.5, 82.0, 6.4, 230.0)
    }

    #[test]
    fn success_result_is_fully_populated() {
        let recommender = Recommender::fitted();
        let result = recommender.recommend(&sample());

        assert!(result.success);
        assert_eq!(result.crop, "Rice");
        assert_eq!(result.image_key, "rice.jpg");
        assert_eq!(
            result.message,
            "Rice is the best crop to be cultivated right there"
        );
    }

    #[test]
    fn failure_result_is_fully_populated() {
        let recommender = Recommender::fitted();
        let mut vector = sample();
        vector.temperature = f64::NAN;

        let result = recommender.recommend(&vector);
        assert!(!result.success);
        assert!(result.message.contains("temperature"));
        assert_eq!(result.crop, "default");
        assert_eq!(result.image_key, "default.jpg");
    }

    #[test]
    fn recommend_is_idempotent() {
        let recommender = Recommender::fitted();
        let first = recommender.recommend(&sample());
        let second = recommender.recommend(&sample());
        assert_eq!(first, second);
    }

    #[test]
    fn unmapped_label_presents_default_entry() {
        let result = Recommender::present(99);
        assert!(!result.success);
        assert_eq!(result.crop, "default");
        assert_eq!(result.image_key, "default.jpg");
        assert_eq!(result.message, UNMAPPED_MESSAGE);
    }

    #[test]
    fn every_catalog_label_presents_its_crop() {
        for crop in Crop::all() {
            let result = Recommender::present(crop.label());
            assert!(result.success);
            assert_eq!(result.crop, crop.to_string());
            assert!(!result.image_key.is_empty());
            assert!(result.message.starts_with(&result.crop));
        }
    }
}
