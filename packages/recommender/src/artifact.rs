//! Fitted preprocessing and classifier parameters.
//!
//! These tables were exported from the fitted artifacts (range scaler,
//! standard scaler, and classification model) and are baked in at build
//! time. Nothing here is learned or mutated at runtime; the inference
//! code treats these values as opaque constants.
//!
//! All tables are in feature-vector order: nitrogen, phosphorus,
//! potassium, temperature, humidity, ph, rainfall.

/// Number of features in a measurement vector.
pub const FEATURE_COUNT: usize = 7;

/// Per-field fitted (minimum, maximum) used for range normalization.
pub const RANGE_BOUNDS: [(f64, f64); FEATURE_COUNT] = [
    (0.0, 140.0),
    (5.0, 145.0),
    (5.0, 205.0),
    (8.825675, 43.675493),
    (14.258040, 99.981876),
    (3.504752, 9.935091),
    (20.211267, 298.560117),
];

/// Per-field fitted (mean, standard deviation) used for standardization.
///
/// Fitted on the range-normalized distribution, not the raw one — the
/// standardization step must therefore run strictly after range
/// normalization.
pub const STANDARD_MOMENTS: [(f64, f64); FEATURE_COUNT] = [
    (0.361123, 0.263799),
    (0.345415, 0.235646),
    (0.215749, 0.253257),
    (0.481807, 0.145147),
    (0.667486, 0.259752),
    (0.461288, 0.119963),
    (0.299096, 0.197455),
];

/// Per-class feature centroids exported from the fitted model, keyed by
/// class label, in raw feature space.
///
/// The classifier projects these through the scaler chain once at
/// construction so that inference compares like with like.
pub const CLASS_CENTROIDS: [(i32, [f64; FEATURE_COUNT]); 22] = [
    (1, [79.8909, 47.5818, 39.8727, 23.6893, 82.2728, 6.4294, 236.1811]),
    (2, [77.7636, 48.4409, 19.7909, 22.3892, 65.0922, 6.2454, 84.7668]),
    (3, [78.4000, 46.8636, 39.9909, 24.9584, 79.6399, 6.7326, 174.7931]),
    (4, [117.7727, 46.2455, 19.5636, 23.9889, 79.8434, 6.9128, 80.0980]),
    (5, [21.9818, 16.9273, 30.5909, 27.4098, 94.8442, 5.9767, 175.6867]),
    (6, [49.8818, 59.0545, 50.0364, 33.7239, 92.4033, 6.7412, 142.6280]),
    (7, [19.5818, 16.5545, 10.0091, 22.7657, 92.1703, 7.0167, 110.4750]),
    (8, [20.8000, 134.2182, 199.8909, 22.6309, 92.3333, 5.9293, 112.6545]),
    (9, [100.3182, 17.7182, 50.0818, 28.6632, 92.3433, 6.3587, 24.6890]),
    (10, [99.4182, 17.0000, 50.2182, 25.5918, 85.1602, 6.4958, 50.7863]),
    (11, [23.1818, 132.5273, 200.1091, 23.8698, 81.8753, 6.0263, 69.6117]),
    (12, [20.0727, 27.1818, 29.9182, 31.2088, 50.1565, 5.7663, 94.7045]),
    (13, [100.2273, 82.0091, 50.0545, 27.3767, 80.3581, 5.9838, 104.6270]),
    (14, [18.8727, 18.7545, 40.2091, 21.8378, 90.1255, 6.4291, 107.5285]),
    (15, [18.7727, 68.3636, 19.4091, 24.5094, 64.8046, 6.9275, 45.6804]),
    (16, [40.0182, 67.4727, 19.2364, 29.9734, 65.1185, 7.1336, 67.8839]),
    (17, [20.9909, 47.2818, 19.8727, 28.5259, 85.4999, 6.7235, 48.4038]),
    (18, [21.4364, 48.0091, 20.2273, 28.1941, 53.1604, 6.8314, 51.1985]),
    (19, [20.7273, 67.7273, 20.2909, 27.7418, 48.0615, 5.7949, 149.4576]),
    (20, [20.7545, 67.5364, 20.0545, 20.0512, 21.6053, 5.7836, 105.9200]),
    (21, [40.0909, 67.7909, 79.9182, 18.8730, 16.8604, 7.3364, 80.0586]),
    (22, [101.2000, 28.7364, 29.9364, 25.5405, 58.8698, 6.7904, 158.0661]),
];
