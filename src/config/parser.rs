use crate::config::types::CrawlConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;
use url::Url;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitescribe::config::load_config;
///
/// let config = load_config(Path::new("site.toml")).unwrap();
/// println!("Start URL: {}", config.start_url);
/// ```
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from a TOML string
pub fn parse_config(content: &str) -> Result<CrawlConfig, ConfigError> {
    let config: CrawlConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a produced artifact can be traced back to the exact
/// configuration that generated it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(CrawlConfig, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Splits a comma-separated path list, trimming entries and dropping empties
///
/// ```
/// use sitescribe::config::parse_path_list;
///
/// assert_eq!(parse_path_list(" /en, /pressroom ,,"), vec!["/en", "/pressroom"]);
/// ```
pub fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Derives the include-only list from the start URL's own path
///
/// Crawling `https://example.com/docs/` restricts the run to paths starting
/// with `/docs`; a start URL at the site root leaves the crawl unrestricted.
pub fn default_include_prefixes(start_url: &str) -> Result<Vec<String>, ConfigError> {
    let url = Url::parse(start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start URL '{}': {}", start_url, e)))?;
    let path = url.path().trim_end_matches('/');

    if path.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![path.to_string()])
    }
}
