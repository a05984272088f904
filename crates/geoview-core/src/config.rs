use crate::app_config::{AppConfig, Environment, SourceLimits, TrailAdapterKind};
use crate::coordinate::Coordinate;
use crate::ConfigError;

/// Upper bound on the webcam search radius (km) accepted by the directory.
pub const MAX_WEBCAM_RADIUS: u32 = 250;
/// Upper bound on webcams returned per request.
pub const MAX_WEBCAM_LIMIT: u32 = 50;
/// Upper bound on the trail search radius (miles).
pub const MAX_TRAIL_RADIUS: u32 = 250;
/// Upper bound on trails returned per request.
pub const MAX_TRAIL_LIMIT: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
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
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_positive_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        Ok(value)
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bounded = |var: &str, default: &str, max: u32| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 || value > max {
            return Err(invalid(var, format!("must be between 1 and {max}, got {value}")));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("GEOVIEW_ENV", "development"));
    let log_level = or_default("GEOVIEW_LOG_LEVEL", "info");
    let request_timeout_secs = parse_positive_u64("GEOVIEW_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GEOVIEW_USER_AGENT", "geoview/0.1 (webcam-trail-search)");

    let webcam_limits = SourceLimits {
        radius: parse_bounded("GEOVIEW_WEBCAM_RADIUS", "250", MAX_WEBCAM_RADIUS)?,
        limit: parse_bounded("GEOVIEW_WEBCAM_LIMIT", "25", MAX_WEBCAM_LIMIT)?,
    };
    let trail_limits = SourceLimits {
        radius: parse_bounded("GEOVIEW_TRAIL_RADIUS", "80", MAX_TRAIL_RADIUS)?,
        limit: parse_bounded("GEOVIEW_TRAIL_LIMIT", "20", MAX_TRAIL_LIMIT)?,
    };

    let trail_adapter = parse_trail_adapter(&or_default("GEOVIEW_TRAIL_ADAPTER", "trailapi"))?;

    let default_lat = parse_f64("GEOVIEW_DEFAULT_LAT", "39.8283")?;
    let default_lon = parse_f64("GEOVIEW_DEFAULT_LON", "-98.5795")?;
    let default_coordinate = Coordinate::new(default_lat, default_lon)
        .map_err(|e| invalid("GEOVIEW_DEFAULT_LAT/GEOVIEW_DEFAULT_LON", e.to_string()))?;

    Ok(AppConfig {
        env,
        log_level,
        request_timeout_secs,
        user_agent,
        webcam_api_key: optional("GEOVIEW_WEBCAM_API_KEY"),
        webcam_base_url: optional("GEOVIEW_WEBCAM_BASE_URL"),
        webcam_limits,
        trail_adapter,
        trail_api_key: optional("GEOVIEW_TRAIL_API_KEY"),
        trail_api_host: optional("GEOVIEW_TRAIL_API_HOST"),
        trail_base_url: optional("GEOVIEW_TRAIL_BASE_URL"),
        trail_limits,
        default_coordinate,
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

fn parse_trail_adapter(s: &str) -> Result<TrailAdapterKind, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trailapi" => Ok(TrailAdapterKind::TrailApi),
        "prescription" | "prescriptiontrails" => Ok(TrailAdapterKind::PrescriptionTrails),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GEOVIEW_TRAIL_ADAPTER".to_string(),
            reason: format!("unknown trail adapter \"{other}\" (expected trailapi or prescription)"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
