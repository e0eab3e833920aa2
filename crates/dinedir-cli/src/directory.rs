//! Directory command handlers for the CLI.
//!
//! The dataset is loaded once in `main`; each handler turns the command-line
//! selection into [`SelectedFilters`], asks the core for a view and renders
//! it as text or JSON.

use std::borrow::Cow;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::Args;
use dinedir_core::{
    build_view, filter_records, DayHours, DirectoryRecord, FacetDimension, FacetIndex,
    FacetVocabulary, FilterAction, PageLabel, SelectedFilters,
};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The loaded dataset plus what is needed to render it.
pub(crate) struct Directory {
    pub records: Vec<DirectoryRecord>,
    pub vocabulary: FacetVocabulary,
    /// Zone the posted hours are written in.
    pub timezone: Tz,
}

impl Directory {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.timezone)
    }
}

/// Facet selection flags shared by `list` and `facets`.
///
/// Repeating a flag selects several options of one dimension; any of them
/// may match. Different dimensions must all match.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Category id, e.g. `pizza_restaurant`
    #[arg(long = "category", value_name = "ID")]
    pub categories: Vec<String>,
    /// District id, e.g. `north_shore`
    #[arg(long = "district", value_name = "ID")]
    pub districts: Vec<String>,
    /// Price tier from 1 ($) to 4 ($$$$)
    #[arg(
        long = "price",
        value_name = "TIER",
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub prices: Vec<u8>,
    /// Feature id, e.g. `outdoor_seating`
    #[arg(long = "feature", value_name = "ID")]
    pub features: Vec<String>,
    /// Free-text search over names, descriptions and tags
    #[arg(long, short)]
    pub query: Option<String>,
    /// Only restaurants open right now
    #[arg(long)]
    pub open_now: bool,
}

impl FilterArgs {
    /// Folds the flags into a selection, one action at a time.
    pub(crate) fn selection(&self) -> SelectedFilters {
        let prices: Vec<String> = self.prices.iter().map(u8::to_string).collect();
        let picks = [
            (FacetDimension::Categories, self.categories.as_slice()),
            (FacetDimension::Districts, self.districts.as_slice()),
            (FacetDimension::PriceRanges, prices.as_slice()),
            (FacetDimension::Features, self.features.as_slice()),
        ];

        let mut filters = SelectedFilters::default();
        for (dimension, ids) in picks {
            for id in ids {
                filters = filters.apply(FilterAction::SetOption {
                    dimension,
                    id: id.clone(),
                    checked: true,
                });
            }
        }
        if let Some(query) = &self.query {
            filters = filters.apply(FilterAction::SetQuery(query.clone()));
        }
        filters
    }
}

/// Records eligible for display: all of them, or only those open at `now`.
/// Only the open-now subset is copied.
fn candidates<'a>(
    records: &'a [DirectoryRecord],
    open_now: bool,
    now: &DateTime<Tz>,
) -> Cow<'a, [DirectoryRecord]> {
    if !open_now {
        return Cow::Borrowed(records);
    }
    Cow::Owned(
        records
            .iter()
            .filter(|r| r.is_open_at(now))
            .cloned()
            .collect(),
    )
}

/// Print one page of restaurant cards followed by the pager.
///
/// Facet counts always cover the whole dataset, including when `--open-now`
/// narrows the listing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_list(
    directory: &Directory,
    args: &FilterArgs,
    page: usize,
    page_size: usize,
    json: bool,
) -> anyhow::Result<()> {
    let filters = args.selection();
    let now = directory.now();
    let pool = candidates(&directory.records, args.open_now, &now);

    let mut view = build_view(&pool, &filters, &directory.vocabulary, page_size, page);
    if args.open_now {
        view.facets = FacetIndex::build(&directory.records, &directory.vocabulary);
    }
    tracing::debug!(
        matching = view.total_items,
        page = view.page_number,
        total_pages = view.total_pages,
        "directory page built"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.total_items == 0 {
        println!("no restaurants match the current filters");
        return Ok(());
    }

    let first = (view.page_number - 1) * page_size.max(1) + 1;
    let last = first + view.items.len() - 1;
    println!(
        "Showing {first}-{last} of {} restaurants (page {} of {})",
        view.total_items, view.page_number, view.total_pages
    );
    println!();
    for record in &view.items {
        println!("{}", format_card(record, &directory.vocabulary, &now));
    }
    println!("Pages: {}", format_pager(&view.page_labels, view.page_number));

    Ok(())
}

/// Print each dimension's options with counts, marking selected ones.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn run_facets(
    directory: &Directory,
    args: &FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    let filters = args.selection();
    let index = FacetIndex::build(&directory.records, &directory.vocabulary);

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    let now = directory.now();
    let pool = candidates(&directory.records, args.open_now, &now);
    let matching = filter_records(&pool, &filters).len();
    println!("{matching} of {} restaurants match", directory.records.len());

    for dimension in FacetDimension::ALL {
        println!();
        println!("{}", dimension.heading());
        for option in index.options(dimension) {
            let mark = if filters.is_checked(dimension, &option.id) {
                "[x]"
            } else {
                "[ ]"
            };
            println!("  {mark} {} ({})", option.label, option.count);
        }
    }

    Ok(())
}

/// Print one restaurant with its weekly hours.
///
/// # Errors
///
/// Returns an error if no restaurant has the given id or JSON serialization
/// fails.
pub(crate) fn run_show(directory: &Directory, id: &str, json: bool) -> anyhow::Result<()> {
    let record = directory
        .records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow::anyhow!("restaurant '{id}' not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let now = directory.now();
    print!("{}", format_card(record, &directory.vocabulary, &now));
    if let Some(website) = &record.website {
        println!("  {website}");
    }
    if let Some(description) = &record.description {
        println!();
        println!("  {description}");
    }
    println!();
    println!("Hours");
    print!("{}", format_hours(record));

    Ok(())
}

/// Renders a card: title with open/closed badge, rating, price, address and
/// category labels. The badge is left off when the listing has no hours.
pub(crate) fn format_card(
    record: &DirectoryRecord,
    vocabulary: &FacetVocabulary,
    now: &DateTime<Tz>,
) -> String {
    let mut out = record.title.clone();
    if record.has_schedule() {
        let badge = if record.is_open_at(now) { "Open" } else { "Closed" };
        let _ = write!(out, "  [{badge}]");
    }
    out.push('\n');

    let mut details = Vec::new();
    if let Some(rating) = record.rating {
        details.push(match record.review_count {
            Some(count) => format!("{rating:.1} stars ({count} reviews)"),
            None => format!("{rating:.1} stars"),
        });
    }
    if let Some(price) = record.price_level {
        details.push(price.symbol());
    }
    if let Some(address) = &record.address {
        details.push(address.clone());
    }
    if !details.is_empty() {
        let _ = writeln!(out, "  {}", details.join(" | "));
    }

    if !record.categories.is_empty() {
        let labels: Vec<String> = record
            .categories
            .iter()
            .map(|c| vocabulary.label_for(FacetDimension::Categories, c))
            .collect();
        let _ = writeln!(out, "  {}", labels.join(", "));
    }
    out
}

/// `1 [2] 3 ... 9`, with the current page bracketed.
pub(crate) fn format_pager(labels: &[PageLabel], current: usize) -> String {
    labels
        .iter()
        .map(|label| match label {
            PageLabel::Page(n) if *n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per weekday, Monday first.
pub(crate) fn format_hours(record: &DirectoryRecord) -> String {
    let Some(schedule) = &record.schedule else {
        return "  hours not posted\n".to_string();
    };

    let mut out = String::new();
    for (idx, name) in WEEKDAYS.iter().enumerate() {
        let hours = match schedule.day(idx) {
            Some(DayHours::Open { open, close }) => {
                format!("{} - {}", format_minutes(*open), format_minutes(*close))
            }
            Some(DayHours::Closed) | None => "Closed".to_string(),
        };
        let _ = writeln!(out, "  {name:<10}{hours}");
    }
    out
}

/// Minutes since midnight on a 12-hour clock: `1020` is `"5:00 PM"`.
pub(crate) fn format_minutes(minutes: u16) -> String {
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
