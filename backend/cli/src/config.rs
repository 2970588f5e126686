use std::path::PathBuf;
use std::time::Duration;

use textlens_vision::{Credentials, DEFAULT_ENDPOINT};

/// textlens runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory the image choices are listed from
    pub images_dir: PathBuf,
    /// Where the raw response is written
    pub output_path: PathBuf,
    /// Cloud Vision base URL
    pub endpoint: String,
    /// API key, sent as `?key=`
    pub api_key: Option<String>,
    /// OAuth2 access token, used when no API key is set
    pub access_token: Option<String>,
    /// Project billed for token-authenticated requests
    pub quota_project: Option<String>,
    /// OCR language hints (BCP-47 codes)
    pub language_hints: Vec<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Log level
    pub log_level: String,
    /// Directory for rolling NDJSON logs
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("./images"),
            output_path: PathBuf::from("annotate_image_response.json"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            access_token: None,
            quota_project: None,
            language_hints: Vec::new(),
            timeout: Duration::from_secs(60),
            log_level: "warn".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Self {
            images_dir: non_empty("TEXTLENS_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            output_path: non_empty("TEXTLENS_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            endpoint: non_empty("TEXTLENS_VISION_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: non_empty("TEXTLENS_VISION_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")),
            access_token: non_empty("GOOGLE_OAUTH_ACCESS_TOKEN"),
            quota_project: non_empty("GOOGLE_CLOUD_QUOTA_PROJECT"),
            language_hints: non_empty("TEXTLENS_LANGUAGE_HINTS")
                .map(|v| split_hints(&v))
                .unwrap_or_default(),
            timeout: non_empty("TEXTLENS_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: non_empty("TEXTLENS_LOG_DIR").map(PathBuf::from),
        }
    }

    /// Credentials for the Vision API; the API key wins over a token.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(key) = &self.api_key {
            return Some(Credentials::ApiKey(key.clone()));
        }
        self.access_token.as_ref().map(|token| Credentials::AccessToken {
            token: token.clone(),
            quota_project: self.quota_project.clone(),
        })
    }
}

fn split_hints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
