use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Immutable input for one crawl run
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// First page of the crawl; its authority bounds the crawl to one site
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Path prefixes that are never visited (checked before includes)
    #[serde(rename = "exclude-paths", default)]
    pub exclude_paths: Vec<String>,

    /// Path prefixes the crawl is restricted to; empty means unrestricted
    #[serde(rename = "include-only-prefixes", default)]
    pub include_only_prefixes: Vec<String>,

    /// Run text recognition on page images
    #[serde(rename = "enable-ocr", default)]
    pub enable_ocr: bool,

    /// Extract text from linked PDF files
    #[serde(rename = "enable-pdf", default)]
    pub enable_pdf: bool,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub crawler: CrawlerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Crawl pacing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Pause after every processed page in document mode (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Pause after every visited URL in listing mode (milliseconds)
    #[serde(rename = "listing-page-delay-ms", default)]
    pub listing_page_delay_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving timestamped artifacts
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("sitescribe/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("outputs")
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: default_page_delay_ms(),
            listing_page_delay_ms: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl CrawlConfig {
    /// Creates a configuration with default knobs for the given start URL
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            exclude_paths: Vec::new(),
            include_only_prefixes: Vec::new(),
            enable_ocr: false,
            enable_pdf: false,
            fetch: FetchConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_exclude_paths(mut self, paths: Vec<String>) -> Self {
        self.exclude_paths = paths;
        self
    }

    pub fn with_include_only_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.include_only_prefixes = prefixes;
        self
    }

    pub fn with_ocr(mut self, enabled: bool) -> Self {
        self.enable_ocr = enabled;
        self
    }

    pub fn with_pdf(mut self, enabled: bool) -> Self {
        self.enable_pdf = enabled;
        self
    }

    /// Sets the same pause for both crawl modes
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        let millis = delay.as_millis() as u64;
        self.crawler.page_delay_ms = millis;
        self.crawler.listing_page_delay_ms = millis;
        self
    }

    pub fn with_output_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.connect_timeout_secs)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.crawler.page_delay_ms)
    }

    pub fn listing_page_delay(&self) -> Duration {
        Duration::from_millis(self.crawler.listing_page_delay_ms)
    }
}
