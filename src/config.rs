use crate::{Result, SoundCloudError};
use std::env;
use std::fmt;

/// Default SoundCloud API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.soundcloud.com";

/// Environment variable holding the API client id.
pub const CLIENT_ID_ENV: &str = "SOUNDCLOUD_CLIENT_ID";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SOUNDCLOUD_API_URL";

/// Credential and endpoint settings for a [`SoundCloudClient`](crate::SoundCloudClient).
///
/// The client id is sent as the `client_id` query parameter on every request.
///
/// # Examples
///
/// ```rust
/// use soundcloud_track::ClientConfig;
///
/// let config = ClientConfig::new("abc123").with_base_url("http://localhost:8080/");
/// assert_eq!(config.client_id, "abc123");
/// assert_eq!(config.base_url, "http://localhost:8080");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application client id issued by SoundCloud
    pub client_id: String,
    /// API base URL without a trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config for the public SoundCloud API.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load the config from `SOUNDCLOUD_CLIENT_ID` and, if set, `SOUNDCLOUD_API_URL`.
    pub fn from_env() -> Result<Self> {
        let client_id = env::var(CLIENT_ID_ENV)
            .ok()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| SoundCloudError::Config(format!("{CLIENT_ID_ENV} is not set")))?;

        let config = Self::new(client_id);
        Ok(match env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
