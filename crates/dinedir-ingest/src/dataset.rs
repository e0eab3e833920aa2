//! Dataset loading: read, split into entries, normalize, dedupe.

use std::collections::HashSet;
use std::path::Path;

use dinedir_core::DirectoryRecord;

use crate::error::IngestError;
use crate::normalize::normalize_restaurant;
use crate::types::{RawDataset, RawRestaurant};

/// Reads and normalizes the dataset at `path`.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be read and
/// [`IngestError::Deserialize`] if it is not a recognizable dataset.
pub fn load_dataset(path: &Path) -> Result<Vec<DirectoryRecord>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records = parse_dataset(&content)?;
    tracing::info!(path = %path.display(), count = records.len(), "dataset loaded");
    Ok(records)
}

/// Normalizes a dataset document.
///
/// Entries that fail to deserialize or normalize are skipped with a warning.
/// When two entries share an id the first one is kept. Output order follows
/// the document for both the keyed form and the list form.
///
/// # Errors
///
/// Returns [`IngestError::Deserialize`] if the document is neither the keyed
/// form nor a list.
pub fn parse_dataset(json: &str) -> Result<Vec<DirectoryRecord>, IngestError> {
    let dataset: RawDataset =
        serde_json::from_str(json).map_err(|e| IngestError::Deserialize {
            context: "dataset".to_string(),
            source: e,
        })?;

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (key, value) in dataset.into_entries() {
        let raw: RawRestaurant = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(key = %key, %error, "skipping malformed restaurant entry");
                continue;
            }
        };

        let record = match normalize_restaurant(&key, raw) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(key = %key, %error, "skipping restaurant");
                continue;
            }
        };

        if !seen.insert(record.id.clone()) {
            tracing::warn!(key = %key, id = %record.id, "duplicate restaurant id; keeping first");
            continue;
        }
        records.push(record);
    }

    Ok(records)
}
