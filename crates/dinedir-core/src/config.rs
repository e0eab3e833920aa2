use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("DINEDIR_ENV", "development"));
    let log_level = or_default("DINEDIR_LOG_LEVEL", "info");
    let data_path = PathBuf::from(or_default("DINEDIR_DATA_PATH", "./data/restaurants.json"));
    let vocabulary_path = lookup("DINEDIR_VOCABULARY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let page_size = or_default("DINEDIR_PAGE_SIZE", "6")
        .parse::<usize>()
        .map_err(|e| invalid("DINEDIR_PAGE_SIZE", e.to_string()))?;
    if page_size == 0 {
        return Err(invalid(
            "DINEDIR_PAGE_SIZE",
            "must be at least 1".to_string(),
        ));
    }

    let timezone = or_default("DINEDIR_TIMEZONE", "America/New_York")
        .parse::<chrono_tz::Tz>()
        .map_err(|e| invalid("DINEDIR_TIMEZONE", e.to_string()))?;

    Ok(AppConfig {
        env,
        log_level,
        data_path,
        vocabulary_path,
        page_size,
        timezone,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
