use std::time::Duration;
use pn_core::{Error, Result, SortBy};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const API_KEY_ENV: &str = "NEWS_API_KEY";
/// Placeholder shipped in sample configs; never a real key.
pub const PLACEHOLDER_KEY: &str = "your_api_key_here";
pub const MIN_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 20;

#[derive(Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub page_size: u32,
    pub sort_by: SortBy,
    pub timeout: Duration,
}

// Keep the key out of logs.
impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("page_size", &self.page_size)
            .field("sort_by", &self.sort_by)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            page_size: 10,
            sort_by: SortBy::default(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl NewsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Reads the key from `NEWS_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_ENV)))?;
        let config = Self::new(key);
        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let key = self.api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_KEY {
            return Err(Error::Config(format!(
                "a NewsAPI key is required; get one at https://newsapi.org and set {}",
                API_KEY_ENV
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NewsConfig::default();
        assert_eq!(config.base_url, "https://newsapi.org/v2");
        assert_eq!(config.language, "en");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.sort_by, SortBy::Latest);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_or_placeholder_key() {
        assert!(matches!(NewsConfig::default().validate(), Err(Error::Config(_))));
        assert!(matches!(NewsConfig::new("your_api_key_here").validate(), Err(Error::Config(_))));
        assert!(NewsConfig::new("abc123").validate().is_ok());
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(NewsConfig::new("k").with_page_size(1).page_size, 5);
        assert_eq!(NewsConfig::new("k").with_page_size(12).page_size, 12);
        assert_eq!(NewsConfig::new("k").with_page_size(100).page_size, 20);
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", NewsConfig::new("secret-key"));
        assert!(!debug.contains("secret-key"));
    }
}
