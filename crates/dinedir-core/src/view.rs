//! Everything a renderer needs for one directory page.

use serde::Serialize;

use crate::facets::FacetIndex;
use crate::filter::{filter_records, SelectedFilters};
use crate::pagination::{clamp_page, page_labels, paginate, PageLabel};
use crate::record::DirectoryRecord;
use crate::vocabulary::FacetVocabulary;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView<'a> {
    /// Records on the current page, in dataset order.
    pub items: Vec<&'a DirectoryRecord>,
    /// Option lists with counts over the full dataset.
    pub facets: FacetIndex,
    /// Records matching the selection, across all pages.
    pub total_items: usize,
    pub total_pages: usize,
    /// The requested page clamped into range.
    pub page_number: usize,
    pub page_labels: Vec<PageLabel>,
}

/// Filters, counts and slices `records` for the given selection and page.
#[must_use]
pub fn build_view<'a>(
    records: &'a [DirectoryRecord],
    filters: &SelectedFilters,
    vocabulary: &FacetVocabulary,
    page_size: usize,
    page_number: usize,
) -> DirectoryView<'a> {
    let facets = FacetIndex::build(records, vocabulary);
    let matching = filter_records(records, filters);

    let total_pages = paginate(&matching, page_size, 1).total_pages;
    let page_number = clamp_page(page_number, total_pages);
    let page = paginate(&matching, page_size, page_number);

    DirectoryView {
        items: page.items.to_vec(),
        facets,
        total_items: page.total_items,
        total_pages,
        page_number,
        page_labels: page_labels(page_number, total_pages),
    }
}
