use crate::config::types::HarvestConfig;
use crate::ConfigError;
use std::path::Path;

/// Loads the configuration: defaults, then an optional TOML file, then
/// `QH_`-prefixed environment variables.
///
/// A missing file path is fine (defaults apply); a file that exists but does
/// not parse is an error.
///
/// # Arguments
///
/// * `path` - Optional path to a TOML configuration file
pub fn load_config(path: Option<&Path>) -> Result<HarvestConfig, ConfigError> {
    let mut config = match path {
        Some(p) if p.exists() => {
            let content = std::fs::read_to_string(p)?;
            toml::from_str(&content)?
        }
        _ => HarvestConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

/// Applies environment overrides to a configuration.
///
/// The lookup function is injected so tests can supply variables without
/// mutating process state. Unparseable numeric or boolean values log a
/// warning and leave the previous value in place.
pub(crate) fn apply_env_overrides<F>(config: &mut HarvestConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("QH_SOURCES_FILE") {
        config.sources_file = v;
    }
    if let Some(v) = lookup("QH_OUTPUT_DB") {
        config.output_db = v;
    }
    if let Some(v) = lookup("QH_OUTPUT_CSV") {
        config.output_csv = v;
    }
    if let Some(v) = lookup("QH_USER_AGENT") {
        config.user_agent = v;
    }

    override_number(&mut config.max_retries, "QH_MAX_RETRIES", &lookup);
    override_number(&mut config.retry_delay_secs, "QH_RETRY_DELAY", &lookup);
    override_number(
        &mut config.request_timeout_secs,
        "QH_REQUEST_TIMEOUT",
        &lookup,
    );
    override_number(&mut config.max_workers, "QH_MAX_WORKERS", &lookup);

    if let Some(v) = lookup("QH_VERBOSE") {
        match parse_bool(&v) {
            Some(flag) => config.verbose = flag,
            None => tracing::warn!("Invalid value for QH_VERBOSE: {}", v),
        }
    }
}

fn override_number<T, F>(slot: &mut T, key: &str, lookup: &F)
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(key) {
        match v.parse::<T>() {
            Ok(parsed) => *slot = parsed,
            Err(_) => tracing::warn!("Invalid value for {}: {}", key, v),
        }
    }
}

/// Parses a boolean setting. Accepts `1/0`, `yes/no`, and `true/false` in
/// any casing; anything else is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" => Some(true),
        "0" | "no" | "false" => Some(false),
        _ => None,
    }
}
