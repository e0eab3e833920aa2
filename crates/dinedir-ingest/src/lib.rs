pub mod dataset;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod types;

pub use dataset::{load_dataset, parse_dataset};
pub use error::IngestError;
pub use normalize::{normalize_restaurant, wheelchair_accessible, WHEELCHAIR_ACCESSIBLE};
pub use parse::{parse_day_line, parse_schedule};
pub use types::{RawDataset, RawRestaurant};
