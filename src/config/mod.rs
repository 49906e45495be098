//! Configuration module for SiteScribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use sitescribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site.toml")).unwrap();
//! println!("Crawl starts at: {}", config.start_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, CrawlerConfig, FetchConfig, OutputConfig};

// Re-export parser functions
pub use parser::{
    compute_config_hash, default_include_prefixes, load_config, load_config_with_hash,
    parse_config, parse_path_list,
};
pub use validation::validate;
