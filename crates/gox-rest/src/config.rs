//! Client configuration

use gox_auth::Credentials;

use crate::error::{RestError, RestResult};

/// Default API base address
pub const DEFAULT_BASE_URL: &str = "https://data.mtgox.com/api/1/";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const BASE_URL_VAR: &str = "GOX_BASE_URL";
const TIMEOUT_VAR: &str = "GOX_TIMEOUT_SECS";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL that endpoint paths are appended to
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment
    ///
    /// Reads `GOX_BASE_URL` and `GOX_TIMEOUT_SECS` when set, and loads
    /// credentials when both `GOX_API_KEY` and `GOX_API_SECRET` are present.
    pub fn from_env() -> RestResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_VAR) {
            let secs: u64 = timeout
                .trim()
                .parse()
                .map_err(|_| RestError::Config(format!("{} is not a number: {}", TIMEOUT_VAR, timeout)))?;
            config = config.with_timeout(secs);
        }
        if Credentials::env_present() {
            config = config.with_credentials(Credentials::from_env()?);
        }

        Ok(config)
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL with exactly one trailing slash
    pub(crate) fn normalized_base_url(&self) -> RestResult<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(RestError::Config(format!("Invalid base URL: {}", self.base_url)));
        }
        Ok(format!("{}/", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_base_url("http://localhost:8080/api/1")
            .with_user_agent("test-agent");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(
            config.normalized_base_url().unwrap(),
            "http://localhost:8080/api/1/"
        );
    }

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.normalized_base_url().unwrap(), DEFAULT_BASE_URL);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = ClientConfig::new().with_base_url("ftp://example.com");
        assert!(matches!(config.normalized_base_url(), Err(RestError::Config(_))));
    }
}
