use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("normalization error for restaurant {key}: {reason}")]
    Normalization { key: String, reason: String },
}
