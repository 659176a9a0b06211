//! Application configuration.
//!
//! Everything externally meaningful is here: the API base URL, the page size
//! (12 records per page), and the request timeout. Use the builder pattern to
//! customize, or [`AppConfig::from_env`] to pick up overrides from the
//! environment.

/// Default base URL of the Art Institute of Chicago public API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Records per page. Global row index arithmetic assumes this is fixed for
/// the whole session.
pub const PAGE_SIZE: u32 = 12;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for gallerist.
///
/// # Example
///
/// ```ignore
/// use gallerist::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_base_url("http://localhost:8000")
///     .with_page_size(5);
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the artworks API
    pub api_base_url: String,
    /// Records per page
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log file path (None disables file logging)
    pub log_path: Option<std::path::PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the log file path.
    pub fn with_log_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Build config from environment variables.
    ///
    /// `GALLERIST_API_URL` overrides the API base URL (useful against a local
    /// fixture server). `GALLERIST_LOG` enables file logging: `1` logs to the
    /// platform data directory, any other value is used as the file path.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GALLERIST_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        match std::env::var("GALLERIST_LOG") {
            Ok(v) if v == "1" => {
                config.log_path = dirs::data_local_dir()
                    .map(|dir| dir.join("gallerist").join("gallerist.log"));
            }
            Ok(v) if !v.is_empty() => {
                config.log_path = Some(std::path::PathBuf::from(v));
            }
            _ => {}
        }

        config
    }
}
