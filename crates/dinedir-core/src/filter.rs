//! Filter selection state and the per-record predicate.
//!
//! Within a dimension, selected options are OR-ed; across dimensions the
//! non-empty selections are AND-ed. An empty selection puts no restriction on
//! its dimension.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{DirectoryRecord, FacetDimension};

/// The user's current selection. Never mutated in place: every transition
/// returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFilters {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub districts: BTreeSet<String>,
    #[serde(default)]
    pub price_ranges: BTreeSet<String>,
    #[serde(default)]
    pub features: BTreeSet<String>,
    /// Free-text search. Blank means no restriction.
    #[serde(default)]
    pub query: String,
}

/// A single change to [`SelectedFilters`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Check or uncheck one option.
    SetOption {
        dimension: FacetDimension,
        id: String,
        checked: bool,
    },
    /// Flip one option.
    Toggle {
        dimension: FacetDimension,
        id: String,
    },
    SetQuery(String),
    Reset,
}

impl SelectedFilters {
    #[must_use]
    pub fn selected(&self, dimension: FacetDimension) -> &BTreeSet<String> {
        match dimension {
            FacetDimension::Categories => &self.categories,
            FacetDimension::Districts => &self.districts,
            FacetDimension::PriceRanges => &self.price_ranges,
            FacetDimension::Features => &self.features,
        }
    }

    fn selected_mut(&mut self, dimension: FacetDimension) -> &mut BTreeSet<String> {
        match dimension {
            FacetDimension::Categories => &mut self.categories,
            FacetDimension::Districts => &mut self.districts,
            FacetDimension::PriceRanges => &mut self.price_ranges,
            FacetDimension::Features => &mut self.features,
        }
    }

    /// `true` when nothing is selected and the query is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FacetDimension::ALL
            .iter()
            .all(|&d| self.selected(d).is_empty())
            && self.query.trim().is_empty()
    }

    #[must_use]
    pub fn is_checked(&self, dimension: FacetDimension, id: &str) -> bool {
        self.selected(dimension).contains(id)
    }

    /// Applies one transition and returns the resulting selection.
    #[must_use]
    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetOption {
                dimension,
                id,
                checked,
            } => self.with_option(dimension, id, checked),
            FilterAction::Toggle { dimension, id } => self.toggled(dimension, id),
            FilterAction::SetQuery(text) => self.with_query(text),
            FilterAction::Reset => Self::default(),
        }
    }

    #[must_use]
    pub fn with_option(
        mut self,
        dimension: FacetDimension,
        id: impl Into<String>,
        checked: bool,
    ) -> Self {
        let id = id.into();
        let set = self.selected_mut(dimension);
        if checked {
            set.insert(id);
        } else {
            set.remove(&id);
        }
        self
    }

    #[must_use]
    pub fn toggled(self, dimension: FacetDimension, id: impl Into<String>) -> Self {
        let id = id.into();
        let checked = !self.is_checked(dimension, &id);
        self.with_option(dimension, id, checked)
    }

    #[must_use]
    pub fn with_query(mut self, text: impl Into<String>) -> Self {
        self.query = text.into();
        self
    }

    /// Clears every selection and the query.
    #[must_use]
    pub fn reset(self) -> Self {
        self.apply(FilterAction::Reset)
    }
}

/// Decides whether `record` passes the current selection.
#[must_use]
pub fn matches(record: &DirectoryRecord, filters: &SelectedFilters) -> bool {
    FacetDimension::ALL
        .iter()
        .all(|&dimension| dimension_matches(record, dimension, filters.selected(dimension)))
        && query_matches(record, &filters.query)
}

/// Records passing `filters`, in input order.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [DirectoryRecord],
    filters: &SelectedFilters,
) -> Vec<&'a DirectoryRecord> {
    records.iter().filter(|r| matches(r, filters)).collect()
}

fn dimension_matches(
    record: &DirectoryRecord,
    dimension: FacetDimension,
    selected: &BTreeSet<String>,
) -> bool {
    if selected.is_empty() {
        return true;
    }
    record
        .facet_values(dimension)
        .iter()
        .any(|value| selected.contains(value.as_ref()))
}

/// Case-insensitive substring search over title, description, category tags
/// and district tags. Tags also match in their spaced form, so
/// `"italian restaurant"` finds `italian_restaurant`.
fn query_matches(record: &DirectoryRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
    let tag_contains = |tag: &String| contains(tag) || contains(&tag.replace('_', " "));

    contains(&record.title)
        || record.description.as_deref().is_some_and(contains)
        || record.categories.iter().any(tag_contains)
        || record.districts.iter().any(tag_contains)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
