//! Two-stage feature scaling chain.
//!
//! Applies the fitted range normalization and then the fitted
//! standardization to a measurement vector. The order is load-bearing:
//! the standardization moments were fitted on the range-normalized
//! distribution, so swapping the stages produces numerically different,
//! wrong results.

use crate::artifact::{FEATURE_COUNT, RANGE_BOUNDS, STANDARD_MOMENTS};
use crate::{FeatureVector, RecommendError, ScaledVector};

/// The fitted scaling chain: range normalization followed by
/// standardization.
///
/// Pure function of the fitted parameters; holds no other state and
/// performs no I/O.
#[derive(Debug, Clone)]
pub struct ScalerChain {
    ranges: [(f64, f64); FEATURE_COUNT],
    moments: [(f64, f64); FEATURE_COUNT],
}

impl ScalerChain {
    /// Builds the chain from the baked fitted parameters.
    #[must_use]
    pub const fn fitted() -> Self {
        Self {
            ranges: RANGE_BOUNDS,
            moments: STANDARD_MOMENTS,
        }
    }

    /// Scales a measurement vector.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::NonFinite`] if any field is NaN or
    /// infinite; no clamping is attempted.
    pub fn scale(&self, vector: &FeatureVector) -> Result<ScaledVector, RecommendError> {
        vector.validate()?;
        Ok(ScaledVector::new(self.apply(vector.values())))
    }

    /// Applies both transforms, in order, to already-validated values.
    pub(crate) fn apply(&self, mut values: [f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        for (i, value) in values.iter_mut().enumerate() {
            let (min, max) = self.ranges[i];
            let (mean, std_dev) = self.moments[i];
            let normalized = (*value - min) / (max - min);
            *value = (normalized - mean) / std_dev;
        }
        values
    }
}
