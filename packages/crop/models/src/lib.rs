#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crop taxonomy types and catalog resolution.
//!
//! This crate defines the canonical set of recommendable crops used across
//! the crop-advisor system. Each crop carries a fixed class label matching
//! the labels emitted by the fitted classifier, plus the display metadata
//! (image key, cultivation-info key) needed to render a recommendation.
//!
//! The catalog is a compile-time table: labels that fall outside it resolve
//! to a sentinel default entry rather than failing, so every lookup yields
//! a displayable result.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A recommendable crop.
///
/// Discriminants are the class labels produced by the fitted classifier;
/// the numbering and ordering are fixed by the training data and must not
/// be rearranged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    /// Label 1
    Rice = 1,
    /// Label 2
    Maize = 2,
    /// Label 3
    Jute = 3,
    /// Label 4
    Cotton = 4,
    /// Label 5
    Coconut = 5,
    /// Label 6
    Papaya = 6,
    /// Label 7
    Orange = 7,
    /// Label 8
    Apple = 8,
    /// Label 9
    Muskmelon = 9,
    /// Label 10
    Watermelon = 10,
    /// Label 11
    Grapes = 11,
    /// Label 12
    Mango = 12,
    /// Label 13
    Banana = 13,
    /// Label 14
    Pomegranate = 14,
    /// Label 15
    Lentil = 15,
    /// Label 16
    Blackgram = 16,
    /// Label 17
    Mungbean = 17,
    /// Label 18
    Mothbeans = 18,
    /// Label 19
    Pigeonpeas = 19,
    /// Label 20
    Kidneybeans = 20,
    /// Label 21
    Chickpea = 21,
    /// Label 22
    Coffee = 22,
}

impl Crop {
    /// Returns the classifier label for this crop.
    #[must_use]
    pub const fn label(self) -> i32 {
        self as i32
    }

    /// Looks up a crop by classifier label.
    ///
    /// Returns `None` for labels outside the known range; callers that
    /// need a displayable result should use [`resolve`] instead.
    #[must_use]
    pub const fn from_label(label: i32) -> Option<Self> {
        match label {
            1 => Some(Self::Rice),
            2 => Some(Self::Maize),
            3 => Some(Self::Jute),
            4 => Some(Self::Cotton),
            5 => Some(Self::Coconut),
            6 => Some(Self::Papaya),
            7 => Some(Self::Orange),
            8 => Some(Self::Apple),
            9 => Some(Self::Muskmelon),
            10 => Some(Self::Watermelon),
            11 => Some(Self::Grapes),
            12 => Some(Self::Mango),
            13 => Some(Self::Banana),
            14 => Some(Self::Pomegranate),
            15 => Some(Self::Lentil),
            16 => Some(Self::Blackgram),
            17 => Some(Self::Mungbean),
            18 => Some(Self::Mothbeans),
            19 => Some(Self::Pigeonpeas),
            20 => Some(Self::Kidneybeans),
            21 => Some(Self::Chickpea),
            22 => Some(Self::Coffee),
            _ => None,
        }
    }

    /// Returns the lowercase key used for image and cultivation-info
    /// lookups (e.g., `"rice"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::Maize => "maize",
            Self::Jute => "jute",
            Self::Cotton => "cotton",
            Self::Coconut => "coconut",
            Self::Papaya => "papaya",
            Self::Orange => "orange",
            Self::Apple => "apple",
            Self::Muskmelon => "muskmelon",
            Self::Watermelon => "watermelon",
            Self::Grapes => "grapes",
            Self::Mango => "mango",
            Self::Banana => "banana",
            Self::Pomegranate => "pomegranate",
            Self::Lentil => "lentil",
            Self::Blackgram => "blackgram",
            Self::Mungbean => "mungbean",
            Self::Mothbeans => "mothbeans",
            Self::Pigeonpeas => "pigeonpeas",
            Self::Kidneybeans => "kidneybeans",
            Self::Chickpea => "chickpea",
            Self::Coffee => "coffee",
        }
    }

    /// Returns the image filename for this crop (e.g., `"rice.jpg"`).
    #[must_use]
    pub fn image_key(self) -> String {
        format!("{}.jpg", self.key())
    }

    /// Returns all variants of this enum, in label order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Rice,
            Self::Maize,
            Self::Jute,
            Self::Cotton,
            Self::Coconut,
            Self::Papaya,
            Self::Orange,
            Self::Apple,
            Self::Muskmelon,
            Self::Watermelon,
            Self::Grapes,
            Self::Mango,
            Self::Banana,
            Self::Pomegranate,
            Self::Lentil,
            Self::Blackgram,
            Self::Mungbean,
            Self::Mothbeans,
            Self::Pigeonpeas,
            Self::Kidneybeans,
            Self::Chickpea,
            Self::Coffee,
        ]
    }
}

/// Display metadata for a resolved catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Human-readable crop name (`"Rice"`), or `"default"` for the
    /// sentinel entry.
    pub crop: String,
    /// Image filename (`"rice.jpg"` / `"default.jpg"`).
    pub image_key: String,
    /// Key for the static cultivation-info text (`"rice"` / `"default"`).
    pub info_key: String,
}

impl CatalogEntry {
    /// The sentinel entry served for labels absent from the catalog.
    #[must_use]
    pub fn default_entry() -> Self {
        Self {
            crop: "default".to_string(),
            image_key: "default.jpg".to_string(),
            info_key: "default".to_string(),
        }
    }
}

impl From<Crop> for CatalogEntry {
    fn from(crop: Crop) -> Self {
        Self {
            crop: crop.to_string(),
            image_key: crop.image_key(),
            info_key: crop.key().to_string(),
        }
    }
}

/// Resolves a classifier label to its catalog entry.
///
/// Total over all integers: labels outside the known range (zero,
/// negatives, anything above 22) yield the sentinel default entry. An
/// unmapped label is policy, not an error — the system always returns a
/// displayable result.
#[must_use]
pub fn resolve(label: i32) -> CatalogEntry {
    Crop::from_label(label).map_or_else(CatalogEntry::default_entry, CatalogEntry::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrip() {
        for crop in Crop::all() {
            let label = crop.label();
            assert_eq!(Crop::from_label(label), Some(*crop));
        }
    }

    #[test]
    fn labels_are_contiguous() {
        let labels: Vec<i32> = Crop::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, (1..=22).collect::<Vec<i32>>());
    }

    #[test]
    fn image_keys_are_lowercase_jpg() {
        for crop in Crop::all() {
            let key = crop.image_key();
            assert!(key.ends_with(".jpg"), "{crop:?} image key {key}");
            assert_eq!(key, key.to_lowercase());
            assert_eq!(key, format!("{}.jpg", crop.key()));
        }
    }

    #[test]
    fn resolve_known_labels() {
        let entry = resolve(1);
        assert_eq!(entry.crop, "Rice");
        assert_eq!(entry.image_key, "rice.jpg");
        assert_eq!(entry.info_key, "rice");

        let entry = resolve(22);
        assert_eq!(entry.crop, "Coffee");
        assert_eq!(entry.image_key, "coffee.jpg");
    }

    #[test]
    fn resolve_is_total() {
        for label in [0, -1, -42, 23, 100, i32::MIN, i32::MAX] {
            let entry = resolve(label);
            assert_eq!(entry.crop, "default");
            assert_eq!(entry.image_key, "default.jpg");
            assert_eq!(entry.info_key, "default");
        }
    }
}
