pub mod app_config;
pub mod config;
pub mod facets;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod schedule;
pub mod view;
pub mod vocabulary;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use facets::{build_facet_options, FacetIndex, FacetOption};
pub use filter::{filter_records, matches, FilterAction, SelectedFilters};
pub use pagination::{clamp_page, page_labels, paginate, Page, PageLabel};
pub use record::{DirectoryRecord, FacetDimension, PriceLevel};
pub use schedule::{is_open_at, is_open_now, window_contains, DayHours, WeeklySchedule};
pub use view::{build_view, DirectoryView};
pub use vocabulary::{humanize_tag, load_vocabulary, FacetVocabulary, VocabularyEntry};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabularyFileParse(#[source] serde_yaml::Error),

    #[error("vocabulary validation failed: {0}")]
    Validation(String),
}
