use crate::app_config::{AppConfig, Environment};
use crate::search::{DEFAULT_MAX_DISTANCE_KM, DEFAULT_TOP_N};
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
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("HOSPFIND_ENV", "development"))?;

    let dataset_path = PathBuf::from(or_default("HOSPFIND_DATASET_PATH", "./data/HospInfo.csv"));

    let bind_addr = or_default("HOSPFIND_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("HOSPFIND_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("HOSPFIND_LOG_LEVEL", "info");

    let max_distance_km = or_default(
        "HOSPFIND_MAX_DISTANCE_KM",
        &DEFAULT_MAX_DISTANCE_KM.to_string(),
    )
    .parse::<f64>()
    .map_err(|e| invalid("HOSPFIND_MAX_DISTANCE_KM", e.to_string()))?;
    if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
        return Err(invalid(
            "HOSPFIND_MAX_DISTANCE_KM",
            format!("must be a positive number of kilometres, got {max_distance_km}"),
        ));
    }

    let top_n = or_default("HOSPFIND_TOP_N", &DEFAULT_TOP_N.to_string())
        .parse::<usize>()
        .map_err(|e| invalid("HOSPFIND_TOP_N", e.to_string()))?;
    if top_n == 0 {
        return Err(invalid("HOSPFIND_TOP_N", "must be at least 1".to_string()));
    }

    Ok(AppConfig {
        env,
        dataset_path,
        bind_addr,
        log_level,
        max_distance_km,
        top_n,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HOSPFIND_ENV".to_string(),
            reason: format!("unknown environment '{other}'; expected development, test, or production"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
