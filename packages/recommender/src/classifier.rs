//! Crop classifier over scaled measurement vectors.
//!
//! A nearest-centroid model: the per-class centroids exported from the
//! fitted artifact are projected through the scaler chain once at
//! construction, and inference picks the class whose centroid is closest
//! to the scaled input. Deterministic for a fixed input; ties resolve to
//! the earliest table entry.

use crate::artifact::{CLASS_CENTROIDS, FEATURE_COUNT};
use crate::scaler::ScalerChain;
use crate::ScaledVector;

/// The fitted classifier.
///
/// Built once at process start and read-only afterwards; safe to share
/// across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Classifier {
    centroids: Vec<(i32, [f64; FEATURE_COUNT])>,
}

impl Classifier {
    /// Builds the classifier from the baked artifact, projecting each
    /// class centroid through the given scaler chain.
    #[must_use]
    pub fn fitted(scaler: &ScalerChain) -> Self {
        let centroids = CLASS_CENTROIDS
            .iter()
            .map(|(label, centroid)| (*label, scaler.apply(*centroid)))
            .collect();
        Self { centroids }
    }

    /// Classifies a scaled vector, returning exactly one class label.
    #[must_use]
    pub fn classify(&self, scaled: &ScaledVector) -> i32 {
        let mut best_label = self.centroids[0].0;
        let mut best_distance = f64::INFINITY;

        for (label, centroid) in &self.centroids {
            let distance: f64 = centroid
                .iter()
                .zip(scaled.values())
                .map(|(c, v)| (c - v) * (c - v))
                .sum();
            if distance < best_distance {
                best_distance = distance;
                best_label = *label;
            }
        }

        best_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeatureVector;

    fn classify_raw(values: [f64; FEATURE_COUNT]) -> i32 {
        let scaler = ScalerChain::fitted();
        let classifier = Classifier::fitted(&scaler);
        let vector = FeatureVector::from_slice(&values).expect("seven values");
        let scaled = scaler.scale(&vector).expect("finite input");
        classifier.classify(&scaled)
    }

    #[test]
    fn class_centroids_classify_as_themselves() {
        for (label, centroid) in &CLASS_CENTROIDS {
            assert_eq!(
                classify_raw(*centroid),
                *label,
                "centroid for label {label} not closest to itself"
            );
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let values = [90.0, 42.0, 43.0, 20.88, 82.0, 6.5, 202.94];
        let first = classify_raw(values);
        for _ in 0..3 {
            assert_eq!(classify_raw(values), first);
        }
    }

    #[test]
    fn rice_conditions_classify_as_rice() {
        // High rainfall, high humidity, warm: textbook rice conditions.
        assert_eq!(classify_raw([80.0, 47.0, 40.0, 23.5, 82.0, 6.4, 230.0]), 1);
    }

    #[test]
    fn arid_low_humidity_conditions_classify_as_chickpea() {
        // Cool and very dry with high potassium matches the chickpea class.
        assert_eq!(classify_raw([40.0, 68.0, 80.0, 19.0, 17.0, 7.3, 80.0]), 21);
    }
}
