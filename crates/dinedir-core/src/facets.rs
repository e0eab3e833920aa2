//! Per-dimension option lists with record counts.
//!
//! Counts are always taken over the collection handed in. The directory view
//! passes the full, unfiltered dataset so a checked option never hides the
//! counts of its alternatives.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::record::{DirectoryRecord, FacetDimension};
use crate::vocabulary::FacetVocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    /// Number of records carrying `id`. Always greater than zero.
    pub count: usize,
}

/// Builds the option list for one dimension.
///
/// A record counts once per id no matter how often the tag repeats in it.
/// Ordering: curated ids in vocabulary order, then uncurated ids in order of
/// first appearance.
#[must_use]
pub fn build_facet_options(
    records: &[DirectoryRecord],
    dimension: FacetDimension,
    vocabulary: &FacetVocabulary,
) -> Vec<FacetOption> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for record in records {
        let mut seen_in_record = HashSet::new();
        for value in record.facet_values(dimension) {
            if !seen_in_record.insert(value.clone()) {
                continue;
            }
            match counts.get_mut(value.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(value.to_string(), 1);
                    first_seen.push(value.into_owned());
                }
            }
        }
    }

    let (mut curated, uncurated): (Vec<_>, Vec<_>) = first_seen
        .into_iter()
        .partition(|id| vocabulary.rank_of(dimension, id).is_some());
    curated.sort_by_key(|id| vocabulary.rank_of(dimension, id));

    curated
        .into_iter()
        .chain(uncurated)
        .filter_map(|id| {
            let count = counts.get(&id).copied().unwrap_or(0);
            (count > 0).then(|| FacetOption {
                label: vocabulary.label_for(dimension, &id),
                id,
                count,
            })
        })
        .collect()
}

/// Option lists for every dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetIndex {
    pub categories: Vec<FacetOption>,
    pub districts: Vec<FacetOption>,
    pub price_ranges: Vec<FacetOption>,
    pub features: Vec<FacetOption>,
}

impl FacetIndex {
    #[must_use]
    pub fn build(records: &[DirectoryRecord], vocabulary: &FacetVocabulary) -> Self {
        let options = |dimension| build_facet_options(records, dimension, vocabulary);
        Self {
            categories: options(FacetDimension::Categories),
            districts: options(FacetDimension::Districts),
            price_ranges: options(FacetDimension::PriceRanges),
            features: options(FacetDimension::Features),
        }
    }

    #[must_use]
    pub fn options(&self, dimension: FacetDimension) -> &[FacetOption] {
        match dimension {
            FacetDimension::Categories => &self.categories,
            FacetDimension::Districts => &self.districts,
            FacetDimension::PriceRanges => &self.price_ranges,
            FacetDimension::Features => &self.features,
        }
    }
}
