use thiserror::Error;

/// Error types for SoundCloud operations.
///
/// Every failure of a resolve or stream request ends up here: transport problems,
/// error statuses, undecodable bodies and bodies that lack a required key.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use soundcloud_track::{ClientConfig, SoundCloudApi, SoundCloudClient, SoundCloudError};
///
/// #[tokio::main]
/// async fn main() {
///     let client = SoundCloudClient::new(
///         Box::new(http_client::native::NativeClient::new()),
///         ClientConfig::new("my-client-id"),
///     );
///
///     match client.resolve("https://soundcloud.com/artist/track").await {
///         Ok(details) => println!("{} by {}", details.title, details.artist),
///         Err(SoundCloudError::Status { status, .. }) => eprintln!("API answered {status}"),
///         Err(SoundCloudError::MissingField(field)) => eprintln!("no `{field}` in response"),
///         Err(e) => eprintln!("Other error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum SoundCloudError {
    /// HTTP/network related errors.
    ///
    /// Connection failures, DNS errors, and failures while reading the response body.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a client or server error status.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Request URL with the credential stripped
        url: String,
    },

    /// The response body is not JSON, or a field has an unexpected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The response body decoded but a required key is absent.
    ///
    /// Nested keys are named by their path, e.g. `user.username`.
    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SoundCloudError {
    fn from(e: serde_json::Error) -> Self {
        SoundCloudError::Decode(e.to_string())
    }
}
