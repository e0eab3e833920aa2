use super::*;

use dinedir_core::DayHours;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawRestaurant {
    serde_json::from_value(value).unwrap()
}

fn normalize(value: serde_json::Value) -> DirectoryRecord {
    normalize_restaurant("ChIJfallback", raw(value)).unwrap()
}

#[test]
fn missing_basic_info_is_an_error() {
    let err = normalize_restaurant("k1", raw(json!({}))).unwrap_err();
    assert!(
        matches!(err, IngestError::Normalization { ref key, .. } if key == "k1"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn blank_name_is_an_error() {
    let err =
        normalize_restaurant("k2", raw(json!({ "basic_info": { "name": "   " } }))).unwrap_err();
    assert!(
        matches!(err, IngestError::Normalization { ref reason, .. } if reason.contains("name")),
        "unexpected error: {err:?}"
    );
}

#[test]
fn id_falls_back_to_dataset_key() {
    let record = normalize(json!({ "basic_info": { "name": "Blue Door" } }));
    assert_eq!(record.id, "ChIJfallback");
    assert_eq!(record.title, "Blue Door");

    let record = normalize(json!({ "basic_info": { "id": "r-9", "name": " Blue Door " } }));
    assert_eq!(record.id, "r-9");
    assert_eq!(record.title, "Blue Door");
}

#[test]
fn generic_types_are_dropped_and_primary_type_leads() {
    let record = normalize(json!({
        "basic_info": {
            "name": "Corner Cafe",
            "primary_type": "cafe",
            "types": ["point_of_interest", "coffee_shop", "cafe", "food", "establishment"]
        }
    }));
    assert_eq!(record.categories, vec!["cafe", "coffee_shop"]);
}

#[test]
fn district_name_becomes_slug() {
    let record = normalize(json!({
        "basic_info": { "name": "Harbor Grill", "district": "North Shore" }
    }));
    assert_eq!(record.districts, vec!["north_shore"]);

    let record = normalize(json!({ "basic_info": { "name": "Harbor Grill", "district": " " } }));
    assert!(record.districts.is_empty());
}

#[test]
fn restaurant_level_district_wins_over_basic_info() {
    let record = normalize(json!({
        "basic_info": { "id": "p1", "name": "Top" },
        "district": "North Shore"
    }));
    assert_eq!(record.districts, vec!["north_shore"]);

    let record = normalize(json!({
        "basic_info": { "name": "Both", "district": "Downtown" },
        "district": "Red Bank"
    }));
    assert_eq!(record.districts, vec!["red_bank"]);
}

#[test]
fn basic_info_district_used_when_restaurant_level_is_blank() {
    let record = normalize(json!({
        "basic_info": { "name": "Older File", "district": "Southside" },
        "district": ""
    }));
    assert_eq!(record.districts, vec!["southside"]);
}

#[test]
fn restaurant_level_description_wins_and_blank_falls_back() {
    let record = normalize(json!({
        "basic_info": { "name": "Curated", "description": "From the places API" },
        "description": "Neighborhood favourite"
    }));
    assert_eq!(record.description.as_deref(), Some("Neighborhood favourite"));

    let record = normalize(json!({
        "basic_info": { "name": "Reassigned", "description": "From the places API" },
        "description": ""
    }));
    assert_eq!(record.description.as_deref(), Some("From the places API"));
}

#[test]
fn service_and_amenity_flags_become_features() {
    let record = normalize(json!({
        "basic_info": { "name": "Taproom" },
        "service_options": { "dine_in": true, "takeout": false, "outdoor_seating": true },
        "amenities": { "live_music": true, "happy_hour": null, "good_for_groups": true }
    }));
    assert_eq!(
        record.features,
        vec!["dine_in", "outdoor_seating", "good_for_groups", "live_music"]
    );
}

#[test]
fn wheelchair_access_needs_two_of_three() {
    assert!(wheelchair_accessible(true, true, false));
    assert!(wheelchair_accessible(false, true, true));
    assert!(wheelchair_accessible(true, true, true));
    assert!(!wheelchair_accessible(true, false, false));
    assert!(!wheelchair_accessible(false, false, false));
}

#[test]
fn wheelchair_feature_is_derived_from_accessibility_block() {
    let record = normalize(json!({
        "basic_info": { "name": "Ramp House" },
        "accessibility": {
            "wheelchair_accessible_entrance": true,
            "wheelchair_accessible_restroom": true,
            "wheelchair_accessible_seating": false
        }
    }));
    assert!(record.features.iter().any(|f| f == WHEELCHAIR_ACCESSIBLE));

    let record = normalize(json!({
        "basic_info": { "name": "Steps Only" },
        "accessibility": { "wheelchair_accessible_seating": true, "wheelchair_accessible_parking": true }
    }));
    assert!(!record.features.iter().any(|f| f == WHEELCHAIR_ACCESSIBLE));
}

#[test]
fn price_level_shapes() {
    let price = |level: serde_json::Value| {
        normalize(json!({ "basic_info": { "name": "P", "price_level": level } }))
            .price_level
            .map(PriceLevel::get)
    };
    assert_eq!(price(json!(2)), Some(2));
    assert_eq!(price(json!({ "value": "PRICE_LEVEL_EXPENSIVE", "numeric": 3 })), Some(3));
    assert_eq!(price(json!({ "value": "PRICE_LEVEL_MODERATE" })), Some(2));
    assert_eq!(price(json!("PRICE_LEVEL_VERY_EXPENSIVE")), Some(4));
    assert_eq!(price(json!({ "value": "PRICE_LEVEL_FREE", "numeric": 0 })), None);
    assert_eq!(price(json!(5)), None);
    assert_eq!(price(json!(-1)), None);
    assert_eq!(price(json!("PRICE_LEVEL_UNSPECIFIED")), None);
}

#[test]
fn schedule_is_parsed_from_hours() {
    let record = normalize(json!({
        "basic_info": { "name": "Diner" },
        "hours": { "schedule": [
            "Monday: 9:00 AM – 10:00 PM",
            "Tuesday: Closed"
        ] }
    }));
    let schedule = record.schedule.unwrap();
    assert_eq!(schedule.day(0), Some(&DayHours::Open { open: 540, close: 1320 }));
    assert_eq!(schedule.day(1), Some(&DayHours::Closed));
    assert_eq!(schedule.day(6), Some(&DayHours::Closed));
}

#[test]
fn malformed_hours_leave_no_schedule() {
    for hours in [
        json!("9 to 5"),
        json!({ "schedule": "Monday: 9:00 AM – 5:00 PM" }),
        json!({ "schedule": [1, 2, 3] }),
        json!({ "schedule": ["by appointment"] }),
        json!({}),
    ] {
        let record = normalize(json!({ "basic_info": { "name": "Diner" }, "hours": hours }));
        assert!(record.schedule.is_none());
        assert!(!record.has_schedule());
    }
}

#[test]
fn blank_optional_text_becomes_none() {
    let record = normalize(json!({
        "basic_info": { "name": "Plain", "website": "", "description": "  " },
        "location": { "formatted_address": "12 Main St, Lakeside" }
    }));
    assert!(record.website.is_none());
    assert!(record.description.is_none());
    assert_eq!(record.address.as_deref(), Some("12 Main St, Lakeside"));
}

#[test]
fn rating_is_optional() {
    let record = normalize(json!({ "basic_info": { "name": "New Spot" } }));
    assert!(record.rating.is_none());
    assert!(record.review_count.is_none());

    let record = normalize(json!({
        "basic_info": { "name": "Old Spot", "rating": 4.6, "rating_count": 312 }
    }));
    assert_eq!(record.rating, Some(4.6));
    assert_eq!(record.review_count, Some(312));
}
