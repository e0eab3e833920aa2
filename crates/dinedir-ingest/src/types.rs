//! Raw restaurant dataset shapes, as produced by the places data pipeline.
//!
//! ## Observed shape
//!
//! ### Top level
//! `{ "metadata": {...}, "restaurants": { "<place id>": {...}, ... } }`.
//! Entries keep their order in the file. A bare JSON array of restaurants is
//! also accepted. Each restaurant is deserialized on its own so one malformed
//! entry cannot sink the dataset.
//!
//! ### `district` and `description`
//! The district assignment step writes a curated `district` onto the
//! restaurant itself and blanks the restaurant-level `description`. Older
//! files only carry `basic_info.district`. Restaurant-level values win when
//! non-blank.
//!
//! ### `basic_info.price_level`
//! Either a plain number or `{ "value": "PRICE_LEVEL_MODERATE", "numeric": 2 }`
//! after the price-level injection step. Free venues carry `numeric: 0`,
//! which has no tier on the `$` to `$$$$` scale.
//!
//! ### `basic_info.types`
//! Place types as reported by the places API, including generic ones such as
//! `establishment` and `point_of_interest`.
//!
//! ### `hours`
//! Loosely typed. When well formed it is `{ "schedule": ["Monday: 11:00 AM – 10:00 PM", ...] }`.
//! Kept as a raw JSON value and picked apart during normalization.
//!
//! ### Boolean blocks
//! `service_options`, `accessibility` and `amenities` hold optional booleans.
//! A missing key and an explicit `false` mean the same thing.

use serde::Deserialize;

/// Top-level dataset file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDataset {
    Keyed {
        #[serde(default)]
        metadata: Option<serde_json::Value>,
        /// Insertion ordered; the directory lists restaurants in file order.
        restaurants: serde_json::Map<String, serde_json::Value>,
    },
    List(Vec<serde_json::Value>),
}

impl RawDataset {
    /// Entries as `(key, raw value)` pairs. List entries are keyed by index.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, serde_json::Value)> {
        match self {
            RawDataset::Keyed { restaurants, .. } => restaurants.into_iter().collect(),
            RawDataset::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, value)| (idx.to_string(), value))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRestaurant {
    #[serde(default)]
    pub basic_info: Option<RawBasicInfo>,
    #[serde(default)]
    pub service_options: Option<RawServiceOptions>,
    #[serde(default)]
    pub accessibility: Option<RawAccessibility>,
    #[serde(default)]
    pub amenities: Option<RawAmenities>,
    #[serde(default)]
    pub location: Option<RawLocation>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// See the module docs; shape is not trusted.
    #[serde(default)]
    pub hours: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBasicInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub price_level: Option<RawPriceLevel>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPriceLevel {
    Numeric(i64),
    Detailed {
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        numeric: Option<i64>,
    },
    Label(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct RawServiceOptions {
    #[serde(default)]
    pub dine_in: Option<bool>,
    #[serde(default)]
    pub takeout: Option<bool>,
    #[serde(default)]
    pub delivery: Option<bool>,
    #[serde(default)]
    pub curbside_pickup: Option<bool>,
    #[serde(default)]
    pub reservations: Option<bool>,
    #[serde(default)]
    pub outdoor_seating: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAccessibility {
    #[serde(default)]
    pub wheelchair_accessible_parking: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_entrance: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_restroom: Option<bool>,
    #[serde(default)]
    pub wheelchair_accessible_seating: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAmenities {
    #[serde(default)]
    pub restroom: Option<bool>,
    #[serde(default)]
    pub good_for_groups: Option<bool>,
    #[serde(default)]
    pub good_for_watching_sports: Option<bool>,
    #[serde(default)]
    pub live_music: Option<bool>,
    #[serde(default)]
    pub happy_hour: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub formatted_address: Option<String>,
}
