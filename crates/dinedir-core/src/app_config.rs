use std::path::PathBuf;

use chrono_tz::Tz;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Restaurant dataset JSON.
    pub data_path: PathBuf,
    /// Curated facet labels. `None` means the built-in vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    /// Cards per page. Always at least 1.
    pub page_size: usize,
    /// Zone the posted hours are written in.
    pub timezone: Tz,
}
