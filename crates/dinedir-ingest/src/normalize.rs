//! Normalization from raw dataset entries to [`dinedir_core::DirectoryRecord`].
//!
//! Every derived field is computed here, once, so the filter engine only ever
//! sees plain tag sets. Hours parsing is delegated to [`crate::parse`].

use std::collections::HashSet;

use dinedir_core::{DirectoryRecord, PriceLevel};

use crate::error::IngestError;
use crate::parse::parse_schedule;
use crate::types::{
    RawAccessibility, RawAmenities, RawPriceLevel, RawRestaurant, RawServiceOptions,
};

/// Place types that describe nearly every listing and make useless filters.
const GENERIC_TYPES: &[&str] = &[
    "establishment",
    "store",
    "food_store",
    "point_of_interest",
    "food",
    "business",
];

/// Feature tag for the derived accessibility flag.
pub const WHEELCHAIR_ACCESSIBLE: &str = "wheelchair_accessible";

/// Normalizes one raw dataset entry.
///
/// `key` is the entry's key in the dataset and stands in for a missing
/// `basic_info.id`.
///
/// # Errors
///
/// Returns [`IngestError::Normalization`] if the entry has no `basic_info`
/// or no non-empty name.
pub fn normalize_restaurant(
    key: &str,
    raw: RawRestaurant,
) -> Result<DirectoryRecord, IngestError> {
    let info = raw.basic_info.ok_or_else(|| IngestError::Normalization {
        key: key.to_owned(),
        reason: "missing basic_info".into(),
    })?;

    let title = info
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| IngestError::Normalization {
            key: key.to_owned(),
            reason: "restaurant has no name".into(),
        })?
        .to_owned();

    let id = info
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| key.to_owned());

    // The primary type leads so it renders first on the card.
    let categories = dedupe(
        info.primary_type
            .into_iter()
            .chain(info.types)
            .filter(|t| !t.is_empty() && !GENERIC_TYPES.contains(&t.as_str())),
    );

    let districts = non_blank(raw.district)
        .or_else(|| non_blank(info.district))
        .as_deref()
        .map(district_slug)
        .filter(|slug| !slug.is_empty())
        .into_iter()
        .collect();

    let mut features = service_features(raw.service_options.as_ref());
    features.extend(amenity_features(raw.amenities.as_ref()));
    if raw.accessibility.as_ref().is_some_and(accessibility_qualifies) {
        features.push(WHEELCHAIR_ACCESSIBLE.to_owned());
    }

    let schedule = raw.hours.as_ref().and_then(schedule_lines).and_then(|lines| {
        let parsed = parse_schedule(lines.as_slice());
        if parsed.is_none() {
            tracing::debug!(id = %id, "no readable posted hours");
        }
        parsed
    });

    Ok(DirectoryRecord {
        id,
        title,
        description: non_blank(raw.description).or_else(|| non_blank(info.description)),
        address: raw
            .location
            .and_then(|l| l.formatted_address)
            .filter(|s| !s.trim().is_empty()),
        website: info.website.filter(|s| !s.trim().is_empty()),
        categories,
        districts,
        features: dedupe(features),
        price_level: info.price_level.as_ref().and_then(price_level),
        rating: info.rating.filter(|r| r.is_finite() && *r >= 0.0),
        review_count: info.rating_count,
        schedule,
    })
}

/// Wheelchair access counts only when at least two of entrance, parking and
/// restroom are accessible.
#[must_use]
pub fn wheelchair_accessible(entrance: bool, parking: bool, restroom: bool) -> bool {
    [entrance, parking, restroom].into_iter().filter(|&b| b).count() >= 2
}

fn accessibility_qualifies(access: &RawAccessibility) -> bool {
    wheelchair_accessible(
        access.wheelchair_accessible_entrance.unwrap_or(false),
        access.wheelchair_accessible_parking.unwrap_or(false),
        access.wheelchair_accessible_restroom.unwrap_or(false),
    )
}

fn service_features(options: Option<&RawServiceOptions>) -> Vec<String> {
    let Some(o) = options else {
        return Vec::new();
    };
    flagged(&[
        ("dine_in", o.dine_in),
        ("takeout", o.takeout),
        ("delivery", o.delivery),
        ("curbside_pickup", o.curbside_pickup),
        ("reservations", o.reservations),
        ("outdoor_seating", o.outdoor_seating),
    ])
}

fn amenity_features(amenities: Option<&RawAmenities>) -> Vec<String> {
    let Some(a) = amenities else {
        return Vec::new();
    };
    flagged(&[
        ("restroom", a.restroom),
        ("good_for_groups", a.good_for_groups),
        ("good_for_watching_sports", a.good_for_watching_sports),
        ("live_music", a.live_music),
        ("happy_hour", a.happy_hour),
    ])
}

fn flagged(flags: &[(&str, Option<bool>)]) -> Vec<String> {
    flags
        .iter()
        .filter(|(_, on)| on.unwrap_or(false))
        .map(|(tag, _)| (*tag).to_owned())
        .collect()
}

/// Maps the raw price representation onto the 1 to 4 scale. Free venues and
/// unknown labels have no tier.
fn price_level(raw: &RawPriceLevel) -> Option<PriceLevel> {
    let numeric = match raw {
        RawPriceLevel::Numeric(n) => Some(*n),
        RawPriceLevel::Detailed { numeric, value } => {
            numeric.or_else(|| value.as_deref().and_then(price_level_label))
        }
        RawPriceLevel::Label(label) => price_level_label(label),
    }?;
    PriceLevel::new(u8::try_from(numeric).ok()?)
}

fn price_level_label(label: &str) -> Option<i64> {
    match label {
        "PRICE_LEVEL_FREE" => Some(0),
        "PRICE_LEVEL_INEXPENSIVE" => Some(1),
        "PRICE_LEVEL_MODERATE" => Some(2),
        "PRICE_LEVEL_EXPENSIVE" => Some(3),
        "PRICE_LEVEL_VERY_EXPENSIVE" => Some(4),
        _ => None,
    }
}

/// Pulls the weekday description strings out of the untrusted `hours` value.
fn schedule_lines(hours: &serde_json::Value) -> Option<Vec<&str>> {
    let lines: Vec<&str> = hours
        .get("schedule")?
        .as_array()?
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    (!lines.is_empty()).then_some(lines)
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.trim().is_empty())
}

/// `"North Shore"` → `"north_shore"`.
fn district_slug(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Drops repeats, keeping first occurrence order.
fn dedupe(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
