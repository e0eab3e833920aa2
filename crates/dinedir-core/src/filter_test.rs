use crate::record::PriceLevel;

use super::*;

fn sample() -> Vec<DirectoryRecord> {
    let mut tacos = DirectoryRecord::new("tacos", "Taco Mamacita");
    tacos.description = Some("Fresh tortillas and margaritas".to_string());
    tacos.categories = vec!["mexican_restaurant".to_string(), "bar".to_string()];
    tacos.districts = vec!["north_shore".to_string()];
    tacos.features = vec!["takeout".to_string(), "outdoor_seating".to_string()];
    tacos.price_level = PriceLevel::new(2);

    let mut beans = DirectoryRecord::new("beans", "Mean Mug Coffee");
    beans.categories = vec!["coffee_shop".to_string(), "cafe".to_string()];
    beans.districts = vec!["downtown".to_string()];
    beans.features = vec!["takeout".to_string(), "wheelchair_accessible".to_string()];
    beans.price_level = PriceLevel::new(1);

    let mut steak = DirectoryRecord::new("steak", "St. John's Restaurant");
    steak.categories = vec!["fine_dining_restaurant".to_string()];
    steak.districts = vec!["southside".to_string()];
    steak.features = vec!["reservations".to_string()];
    steak.price_level = PriceLevel::new(4);

    let mut unpriced = DirectoryRecord::new("pop", "Pop-up Stand");
    unpriced.categories = vec!["cafe".to_string()];

    vec![tacos, beans, steak, unpriced]
}

fn ids<'a>(records: &[&'a DirectoryRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn empty_selection_matches_everything() {
    let filters = SelectedFilters::default();
    assert!(filters.is_empty());
    assert!(sample().iter().all(|r| matches(r, &filters)));
}

#[test]
fn options_within_dimension_are_ored() {
    let records = sample();
    let filters = SelectedFilters::default()
        .with_option(FacetDimension::Categories, "bar", true)
        .with_option(FacetDimension::Categories, "coffee_shop", true);
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["tacos", "beans"]);
}

#[test]
fn dimensions_are_anded() {
    let records = sample();
    let filters = SelectedFilters::default()
        .with_option(FacetDimension::Features, "takeout", true)
        .with_option(FacetDimension::Districts, "downtown", true);
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["beans"]);
}

#[test]
fn single_dimension_matches_iff_intersection_non_empty() {
    let records = sample();
    let selected = ["reservations", "outdoor_seating"];
    let filters = selected.iter().fold(SelectedFilters::default(), |f, id| {
        f.with_option(FacetDimension::Features, *id, true)
    });
    for record in &records {
        let intersects = record
            .features
            .iter()
            .any(|f| selected.contains(&f.as_str()));
        assert_eq!(matches(record, &filters), intersects, "record {}", record.id);
    }
}

#[test]
fn price_compares_exact_level() {
    let records = sample();
    let filters = SelectedFilters::default().with_option(FacetDimension::PriceRanges, "2", true);
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["tacos"]);
}

#[test]
fn price_selection_excludes_unpriced_records() {
    let records = sample();
    let filters = SelectedFilters::default()
        .with_option(FacetDimension::PriceRanges, "1", true)
        .with_option(FacetDimension::PriceRanges, "2", true)
        .with_option(FacetDimension::PriceRanges, "3", true)
        .with_option(FacetDimension::PriceRanges, "4", true);
    assert!(!ids(&filter_records(&records, &filters)).contains(&"pop"));
}

#[test]
fn unknown_option_id_matches_nothing() {
    let records = sample();
    let filters = SelectedFilters::default().with_option(FacetDimension::Districts, "atlantis", true);
    assert!(filter_records(&records, &filters).is_empty());
}

#[test]
fn query_is_case_insensitive_on_title() {
    let records = sample();
    let filters = SelectedFilters::default().with_query("MEAN MUG");
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["beans"]);
}

#[test]
fn query_searches_description() {
    let records = sample();
    let filters = SelectedFilters::default().with_query("tortillas");
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["tacos"]);
}

#[test]
fn query_searches_tags_in_spaced_form() {
    let records = sample();
    let filters = SelectedFilters::default().with_query("fine dining");
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["steak"]);
}

#[test]
fn query_searches_district_tags() {
    let records = sample();
    let filters = SelectedFilters::default().with_query("southside");
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["steak"]);
}

#[test]
fn whitespace_query_matches_everything() {
    let records = sample();
    let filters = SelectedFilters::default().with_query("   ");
    assert!(filters.is_empty());
    assert_eq!(filter_records(&records, &filters).len(), records.len());
}

#[test]
fn query_is_anded_with_facets() {
    let records = sample();
    let filters = SelectedFilters::default()
        .with_query("cafe")
        .with_option(FacetDimension::Features, "takeout", true);
    assert_eq!(ids(&filter_records(&records, &filters)), vec!["beans"]);
}

#[test]
fn toggle_checks_then_unchecks() {
    let filters = SelectedFilters::default().toggled(FacetDimension::Features, "delivery");
    assert!(filters.is_checked(FacetDimension::Features, "delivery"));
    let filters = filters.toggled(FacetDimension::Features, "delivery");
    assert!(!filters.is_checked(FacetDimension::Features, "delivery"));
    assert!(filters.is_empty());
}

#[test]
fn unchecking_absent_option_is_noop() {
    let before = SelectedFilters::default().with_option(FacetDimension::Categories, "bar", true);
    let after = before
        .clone()
        .with_option(FacetDimension::Categories, "cafe", false);
    assert_eq!(before, after);
}

#[test]
fn apply_reduces_a_sequence_of_actions() {
    let actions = vec![
        FilterAction::SetOption {
            dimension: FacetDimension::Districts,
            id: "downtown".to_string(),
            checked: true,
        },
        FilterAction::Toggle {
            dimension: FacetDimension::Features,
            id: "takeout".to_string(),
        },
        FilterAction::SetQuery("coffee".to_string()),
    ];
    let filters = actions
        .into_iter()
        .fold(SelectedFilters::default(), SelectedFilters::apply);

    assert!(filters.is_checked(FacetDimension::Districts, "downtown"));
    assert!(filters.is_checked(FacetDimension::Features, "takeout"));
    assert_eq!(filters.query, "coffee");

    let cleared = filters.apply(FilterAction::Reset);
    assert_eq!(cleared, SelectedFilters::default());
}

#[test]
fn reset_clears_query_and_options() {
    let filters = SelectedFilters::default()
        .with_option(FacetDimension::PriceRanges, "3", true)
        .with_query("steak")
        .reset();
    assert!(filters.is_empty());
}

#[test]
fn deserializes_from_camel_case_json() {
    let filters: SelectedFilters =
        serde_json::from_str(r#"{"priceRanges": ["1", "2"], "query": "pho"}"#).unwrap();
    assert_eq!(filters.price_ranges.len(), 2);
    assert!(filters.categories.is_empty());
    assert_eq!(filters.query, "pho");
}
