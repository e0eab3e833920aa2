use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::record::{FacetDimension, PriceLevel};
use crate::ConfigError;

/// A curated facet option: the tag id found in records and the label shown
/// next to its checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: String,
    pub label: String,
}

impl VocabularyEntry {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Curated option lists per facet dimension.
///
/// The vocabulary fixes display order and labels. It is not a closed set:
/// tags missing from it still get counted and labelled with
/// [`humanize_tag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetVocabulary {
    #[serde(default)]
    pub categories: Vec<VocabularyEntry>,
    #[serde(default)]
    pub districts: Vec<VocabularyEntry>,
    #[serde(default)]
    pub price_ranges: Vec<VocabularyEntry>,
    #[serde(default)]
    pub features: Vec<VocabularyEntry>,
}

impl FacetVocabulary {
    /// The option lists the directory ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(id, label)| VocabularyEntry::new(id, label))
                .collect::<Vec<_>>()
        };

        Self {
            categories: entries(&[
                ("american_restaurant", "American Restaurant"),
                ("bar", "Bar"),
                ("cafe", "Cafe"),
                ("coffee_shop", "Coffee Shop"),
                ("italian_restaurant", "Italian Restaurant"),
                ("mexican_restaurant", "Mexican Restaurant"),
                ("pizza_restaurant", "Pizza Restaurant"),
                ("seafood_restaurant", "Seafood Restaurant"),
            ]),
            districts: entries(&[
                ("downtown", "Downtown Chattanooga"),
                ("north_shore", "North Shore"),
                ("southside", "Southside"),
                ("east_ridge", "East Ridge"),
                ("red_bank", "Red Bank"),
                ("lookout_mountain", "Lookout Mountain"),
                ("ooltewah", "Ooltewah"),
            ]),
            price_ranges: (PriceLevel::MIN..=PriceLevel::MAX)
                .filter_map(PriceLevel::new)
                .map(|level| VocabularyEntry {
                    id: level.facet_id(),
                    label: level.symbol(),
                })
                .collect(),
            features: entries(&[
                ("takeout", "Takeout"),
                ("delivery", "Delivery"),
                ("outdoor_seating", "Outdoor Seating"),
                ("wheelchair_accessible", "Wheelchair Accessible"),
                ("reservations", "Reservations"),
                ("live_music", "Live Music"),
                ("happy_hour", "Happy Hour"),
            ]),
        }
    }

    #[must_use]
    pub fn entries(&self, dimension: FacetDimension) -> &[VocabularyEntry] {
        match dimension {
            FacetDimension::Categories => &self.categories,
            FacetDimension::Districts => &self.districts,
            FacetDimension::PriceRanges => &self.price_ranges,
            FacetDimension::Features => &self.features,
        }
    }

    /// Position of `id` in the curated list, if curated.
    #[must_use]
    pub fn rank_of(&self, dimension: FacetDimension, id: &str) -> Option<usize> {
        self.entries(dimension).iter().position(|e| e.id == id)
    }

    /// Curated label for `id`, or its humanized form for unknown tags.
    #[must_use]
    pub fn label_for(&self, dimension: FacetDimension, id: &str) -> String {
        self.entries(dimension)
            .iter()
            .find(|e| e.id == id)
            .map_or_else(|| humanize_tag(id), |e| e.label.clone())
    }
}

/// Turns a snake-case tag into a display label: `"bar_and_grill"` becomes
/// `"Bar And Grill"`.
#[must_use]
pub fn humanize_tag(tag: &str) -> String {
    tag.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load and validate a facet vocabulary from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<FacetVocabulary, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let vocabulary: FacetVocabulary =
        serde_yaml::from_str(&content).map_err(ConfigError::VocabularyFileParse)?;

    validate_vocabulary(&vocabulary)?;

    Ok(vocabulary)
}

fn validate_vocabulary(vocabulary: &FacetVocabulary) -> Result<(), ConfigError> {
    for dimension in FacetDimension::ALL {
        let mut seen_ids = HashSet::new();

        for entry in vocabulary.entries(dimension) {
            if entry.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{dimension} entry id must be non-empty"
                )));
            }

            if entry.label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{dimension} entry '{}' has an empty label",
                    entry.id
                )));
            }

            if !seen_ids.insert(entry.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate {dimension} id: '{}'",
                    entry.id
                )));
            }

            if dimension == FacetDimension::PriceRanges
                && entry.id.parse::<u8>().ok().and_then(PriceLevel::new).is_none()
            {
                return Err(ConfigError::Validation(format!(
                    "price range id '{}' must be 1, 2, 3, or 4",
                    entry.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
