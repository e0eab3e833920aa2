//! Page slicing and the pager's page-number labels.

use serde::Serialize;

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, as requested.
    pub page_number: usize,
    /// At least 1, even for an empty collection.
    pub total_pages: usize,
    pub total_items: usize,
}

/// Returns the `page_number`-th slice of `page_size` items.
///
/// A `page_size` of zero is treated as one. Page numbers outside
/// `1..=total_pages` produce an empty slice rather than an error; callers
/// that want clamping use [`clamp_page`] first.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);

    let slice = if page_number == 0 || page_number > total_pages {
        &items[..0]
    } else {
        let start = ((page_number - 1) * page_size).min(total_items);
        let end = start.saturating_add(page_size).min(total_items);
        &items[start..end]
    };

    Page {
        items: slice,
        page_number,
        total_pages,
        total_items,
    }
}

/// Clamps a requested page into `1..=total_pages`.
#[must_use]
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

/// One button in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl std::fmt::Display for PageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageLabel::Page(n) => write!(f, "{n}"),
            PageLabel::Ellipsis => write!(f, "..."),
        }
    }
}

/// Pages shown without an ellipsis.
const FULL_PAGER_LIMIT: usize = 7;

/// Page-number labels for the pager.
///
/// Up to seven pages are all listed. Past that the pager shows a window:
/// `1 2 3 4 5 … N` near the start, `1 … N-4 N-3 N-2 N-1 N` near the end, and
/// `1 … c-1 c c+1 … N` in between.
#[must_use]
pub fn page_labels(current: usize, total_pages: usize) -> Vec<PageLabel> {
    if total_pages <= FULL_PAGER_LIMIT {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let mut labels = Vec::with_capacity(FULL_PAGER_LIMIT);
    if current <= 4 {
        labels.extend((1..=5).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    } else if current >= total_pages - 3 {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((total_pages - 4..=total_pages).map(PageLabel::Page));
    } else {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Ellipsis);
        labels.extend((current - 1..=current + 1).map(PageLabel::Page));
        labels.push(PageLabel::Ellipsis);
        labels.push(PageLabel::Page(total_pages));
    }
    labels
}
