use std::borrow::Cow;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::schedule::{self, WeeklySchedule};

/// Price tier on the familiar `$` to `$$$$` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Returns `None` for anything outside `1..=4`.
    #[must_use]
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The facet option id for this tier, e.g. `"2"`.
    #[must_use]
    pub fn facet_id(self) -> String {
        self.0.to_string()
    }

    /// Dollar-sign label, e.g. `"$$"`.
    #[must_use]
    pub fn symbol(self) -> String {
        "$".repeat(usize::from(self.0))
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("price level {value} is outside 1..=4"))
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One filterable dimension of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetDimension {
    Categories,
    Districts,
    PriceRanges,
    Features,
}

impl FacetDimension {
    pub const ALL: [FacetDimension; 4] = [
        FacetDimension::Categories,
        FacetDimension::Districts,
        FacetDimension::PriceRanges,
        FacetDimension::Features,
    ];

    /// Heading shown above the dimension's checkboxes.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            FacetDimension::Categories => "Categories",
            FacetDimension::Districts => "Districts",
            FacetDimension::PriceRanges => "Price",
            FacetDimension::Features => "Features",
        }
    }
}

impl std::fmt::Display for FacetDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetDimension::Categories => write!(f, "categories"),
            FacetDimension::Districts => write!(f, "districts"),
            FacetDimension::PriceRanges => write!(f, "priceRanges"),
            FacetDimension::Features => write!(f, "features"),
        }
    }
}

/// A restaurant listing after normalization.
///
/// Tag vectors are treated as sets: order is kept for display, duplicates
/// carry no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub categories: Vec<String>,
    pub districts: Vec<String>,
    /// Amenity tags, including derived ones such as `wheelchair_accessible`.
    pub features: Vec<String>,
    pub price_level: Option<PriceLevel>,
    /// Absent means "not shown", never zero.
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub schedule: Option<WeeklySchedule>,
}

impl DirectoryRecord {
    /// Minimal record with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            address: None,
            website: None,
            categories: Vec::new(),
            districts: Vec::new(),
            features: Vec::new(),
            price_level: None,
            rating: None,
            review_count: None,
            schedule: None,
        }
    }

    /// Facet ids this record carries for `dimension`. Price is coerced to its
    /// string id so every dimension compares the same way.
    #[must_use]
    pub fn facet_values(&self, dimension: FacetDimension) -> Vec<Cow<'_, str>> {
        let tags = match dimension {
            FacetDimension::Categories => &self.categories,
            FacetDimension::Districts => &self.districts,
            FacetDimension::Features => &self.features,
            FacetDimension::PriceRanges => {
                return self
                    .price_level
                    .map(|level| Cow::Owned(level.facet_id()))
                    .into_iter()
                    .collect();
            }
        };
        tags.iter().map(|t| Cow::Borrowed(t.as_str())).collect()
    }

    #[must_use]
    pub fn has_schedule(&self) -> bool {
        self.schedule.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Open/closed at `at`, which must be in the business's zone. Listings
    /// without posted hours report closed.
    #[must_use]
    pub fn is_open_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        self.schedule
            .as_ref()
            .is_some_and(|s| schedule::is_open_at(s, at))
    }
}
