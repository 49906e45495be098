use crate::config::types::{CrawlConfig, FetchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_start_url(&config.start_url)?;
    validate_prefixes("exclude-paths", &config.exclude_paths)?;
    validate_prefixes("include-only-prefixes", &config.include_only_prefixes)?;
    validate_fetch_config(&config.fetch)?;

    if config.output.directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the start URL is an absolute HTTP(S) URL with a host
fn validate_start_url(start_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(start_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid start URL '{}': {}", start_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Start URL '{}' must use HTTP or HTTPS",
            start_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Start URL '{}' has no host",
            start_url
        )));
    }

    Ok(())
}

/// Validates path prefix lists: every entry must be a non-empty absolute path
fn validate_prefixes(field: &str, prefixes: &[String]) -> Result<(), ConfigError> {
    for prefix in prefixes {
        if prefix.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot contain empty entries",
                field
            )));
        }

        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} entry '{}' must start with '/'",
                field, prefix
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
