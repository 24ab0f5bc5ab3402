//! Configuration module for tweetscan.
//!
//! This module contains the Twitter/X API credential structure and the
//! environment variable handling used by the binaries. The text-processing core
//! never reads the environment itself.

use log::{debug, error, info, warn};
use std::env;

use crate::error::{Error, Result};

/// Default root of the Twitter REST API v1.1.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com/1.1";

/// Default location of the AFINN lexicon file.
pub const DEFAULT_LEXICON_PATH: &str = "AFINN-111.txt";

/// Configuration struct for Twitter/X API credentials.
///
/// This struct holds the four long-lived OAuth 1.0a credentials used to sign
/// requests to the v1.1 endpoints, plus the API root they are sent to.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// The API key (OAuth consumer key)
    pub api_key: String,
    /// The API secret (OAuth consumer secret)
    pub api_secret: String,
    /// The access token for the authorizing user
    pub access_token_key: String,
    /// The access token secret for the authorizing user
    pub access_token_secret: String,
    /// Root URL the endpoint paths are appended to
    pub base_url: String,
}

/// Masks a credential for logging, keeping at most the first and last 4 characters.
pub(crate) fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len > 16 {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[len - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else if len > 8 {
        let prefix: String = chars[..4].iter().collect();
        format!("{}...", prefix)
    } else {
        "...".to_string()
    }
}

impl TwitterConfig {
    /// Creates a configuration from credentials supplied by the caller.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        access_token_key: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        TwitterConfig {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            access_token_key: access_token_key.into(),
            access_token_secret: access_token_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replaces the API root, e.g. to point at a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Loads one required credential, logging only its masked form.
    fn load_credential(name: &str) -> Result<String> {
        match env::var(name) {
            Ok(value) => {
                let value_length = value.len();
                info!(
                    "Found {} environment variable with length: {}",
                    name, value_length
                );
                debug!("{} (masked): {}", name, mask_secret(&value));

                if value.trim().is_empty() {
                    error!("{} is empty", name);
                    return Err(Error::Config(format!("{} cannot be empty", name)));
                }

                if value_length < 10 {
                    warn!(
                        "{} seems unusually short ({} characters)",
                        name, value_length
                    );
                }

                Ok(value)
            }
            Err(e) => {
                error!("Failed to load {} from environment: {}", name, e);
                Err(Error::Config(format!(
                    "Missing {} environment variable: {}",
                    name, e
                )))
            }
        }
    }

    /// Creates a new `TwitterConfig` instance by loading credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_api_key`: API key (OAuth consumer key)
    /// - `xapi_api_secret`: API secret (OAuth consumer secret)
    /// - `xapi_access_token`: Access token
    /// - `xapi_access_token_secret`: Access token secret
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: API root, defaults to `https://api.twitter.com/1.1`
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If all four credentials are present and non-empty
    /// - `Err(Error::Config)`: If any credential is missing or empty
    ///
    /// # Example
    ///
    /// ```rust
    /// use tweetscan::TwitterConfig;
    ///
    /// std::env::set_var("xapi_api_key", "your_api_key");
    /// std::env::set_var("xapi_api_secret", "your_api_secret");
    /// std::env::set_var("xapi_access_token", "your_access_token");
    /// std::env::set_var("xapi_access_token_secret", "your_access_token_secret");
    ///
    /// let config = TwitterConfig::from_env().unwrap();
    /// assert_eq!(config.api_key, "your_api_key");
    /// ```
    pub fn from_env() -> Result<Self> {
        info!("Loading Twitter configuration from environment variables");

        let api_key = Self::load_credential("xapi_api_key")?;
        let api_secret = Self::load_credential("xapi_api_secret")?;
        let access_token_key = Self::load_credential("xapi_access_token")?;
        let access_token_secret = Self::load_credential("xapi_access_token_secret")?;

        let mut config = TwitterConfig::new(api_key, api_secret, access_token_key, access_token_secret);

        match env::var("xapi_base_url") {
            Ok(base_url) if !base_url.trim().is_empty() => {
                info!("Using API base URL from xapi_base_url: {}", base_url);
                config = config.with_base_url(base_url);
            }
            _ => {
                debug!("No xapi_base_url set, using {}", DEFAULT_BASE_URL);
            }
        }

        info!("Twitter configuration loaded successfully");
        Ok(config)
    }
}

/// Gets the AFINN lexicon path from the environment or returns the default.
///
/// This function reads the `AFINN_PATH` environment variable. If it is not set,
/// it defaults to `AFINN-111.txt` in the working directory.
///
/// # Example
///
/// ```rust
/// use tweetscan::get_lexicon_path;
///
/// std::env::remove_var("AFINN_PATH");
/// assert_eq!(get_lexicon_path(), "AFINN-111.txt");
/// ```
pub fn get_lexicon_path() -> String {
    env::var("AFINN_PATH").unwrap_or_else(|_| DEFAULT_LEXICON_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret_never_shows_short_values() {
        assert_eq!(mask_secret("abc"), "...");
        assert_eq!(mask_secret("0123456789"), "0123...");
        assert_eq!(mask_secret("0123456789abcdefXYZW"), "0123...XYZW");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = TwitterConfig::new("k", "s", "t", "ts").with_base_url("http://localhost:8080/1.1/");
        assert_eq!(config.base_url, "http://localhost:8080/1.1");
    }

    #[test]
    fn test_new_uses_default_base_url() {
        let config = TwitterConfig::new("k", "s", "t", "ts");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.access_token_secret, "ts");
    }
}
