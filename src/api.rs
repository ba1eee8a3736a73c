use crate::config::ClientConfig;
use crate::track::TrackDetails;
use crate::{Result, SoundCloudError};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, StatusCode, Url};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Hops followed before a redirecting request is abandoned.
pub const MAX_REDIRECTS: u32 = 5;

// =============================================================================
// SoundCloudApi trait and implementation
// =============================================================================

/// The two SoundCloud API calls this crate makes.
///
/// When the `mock` feature is enabled, `MockSoundCloudApi` is generated by `mockall`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait SoundCloudApi {
    /// Resolve a public track URL through `GET /resolve`.
    async fn resolve(&self, url: &str) -> Result<TrackDetails>;

    /// Fetch the direct media URL through `GET /tracks/{id}/stream`.
    async fn stream_location(&self, track_id: u64) -> Result<String>;
}

/// Resolve a public track URL to its metadata.
///
/// Every call issues a fresh request; nothing is cached.
pub async fn get_soundcloud_music_details<A: SoundCloudApi + ?Sized>(
    api: &A,
    url: &str,
) -> Result<TrackDetails> {
    api.resolve(url).await
}

/// SoundCloud API client over any [`HttpClient`] implementation.
///
/// The transport must not follow redirects itself; the client decides per call.
/// `resolve` follows the API's redirect to the track resource, while
/// `stream_location` reads the JSON body of the redirect it gets back.
/// The curl backend enabled by the default `curl` feature leaves redirects alone.
///
/// # Examples
///
/// ```rust,no_run
/// use soundcloud_track::{ClientConfig, SoundCloudApi, SoundCloudClient};
///
/// # tokio_test::block_on(async {
/// let client = SoundCloudClient::new(
///     Box::new(http_client::native::NativeClient::new()),
///     ClientConfig::new("my-client-id"),
/// );
///
/// let details = client.resolve("https://soundcloud.com/forss/flickermood").await?;
/// let location = client.stream_location(details.id).await?;
/// println!("{} streams from {}", details.title, location);
/// # Ok::<(), soundcloud_track::SoundCloudError>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct SoundCloudClient {
    client: Arc<dyn HttpClient + Send + Sync>,
    config: ClientConfig,
}

impl SoundCloudClient {
    pub fn new(client: Box<dyn HttpClient + Send + Sync>, config: ClientConfig) -> Self {
        Self {
            client: Arc::from(client),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a GET request and return the response body.
    ///
    /// With `follow_redirects`, 301/302/303/307/308 answers carrying a `Location`
    /// header are followed up to [`MAX_REDIRECTS`] hops. Without it the first answer
    /// is decoded as-is, redirect or not. 4xx and 5xx fail either way.
    async fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        follow_redirects: bool,
    ) -> Result<String> {
        let mut url = format!(
            "{}{}?client_id={}",
            self.config.base_url,
            path,
            urlencoding::encode(&self.config.client_id)
        );
        for (key, value) in query {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        let mut url = url.parse::<Url>().map_err(|e| {
            SoundCloudError::InvalidUrl(format!("{}{}: {e}", self.config.base_url, path))
        })?;

        let mut redirect_count = 0;
        loop {
            log::debug!("GET {}", url.path());

            let mut request = Request::new(Method::Get, url.clone());
            let _ = request.insert_header("Accept", "application/json");

            let mut response = self
                .client
                .send(request)
                .await
                .map_err(|e| SoundCloudError::Http(e.to_string()))?;

            let status = response.status();
            log::trace!("GET {} -> {status}", url.path());

            if status.is_client_error() || status.is_server_error() {
                log::warn!("SoundCloud API returned {status} for {}", url.path());
                return Err(SoundCloudError::Status {
                    status: status.into(),
                    url: without_query(&url),
                });
            }

            let location = response
                .header("Location")
                .map(|values| values.last().as_str().to_string());

            match location {
                Some(location) if follow_redirects && is_followed_redirect(status) => {
                    if redirect_count >= MAX_REDIRECTS {
                        return Err(SoundCloudError::Http("Too many redirects".to_string()));
                    }
                    redirect_count += 1;

                    // Relative locations resolve against the URL that answered.
                    url = url.join(&location).map_err(|e| {
                        SoundCloudError::InvalidUrl(format!("redirect to {location}: {e}"))
                    })?;
                    log::debug!("Following redirect to {}", url.path());
                }
                _ => {
                    return response
                        .body_string()
                        .await
                        .map_err(|e| SoundCloudError::Http(e.to_string()));
                }
            }
        }
    }
}

fn is_followed_redirect(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::MovedPermanently
            | StatusCode::Found
            | StatusCode::SeeOther
            | StatusCode::TemporaryRedirect
            | StatusCode::PermanentRedirect
    )
}

/// Render a request URL for errors, dropping the query that carries the credential.
fn without_query(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[async_trait(?Send)]
impl SoundCloudApi for SoundCloudClient {
    async fn resolve(&self, url: &str) -> Result<TrackDetails> {
        let body = self.get("/resolve", &[("url", url)], true).await?;
        parse_resolve_response(&body)
    }

    async fn stream_location(&self, track_id: u64) -> Result<String> {
        // The 302 body carries the media location; following it would fetch the media.
        let body = self
            .get(&format!("/tracks/{track_id}/stream"), &[], false)
            .await?;
        parse_stream_response(&body)
    }
}

// =============================================================================
// Response parsing
// =============================================================================

// Every field is `None` only when its key is absent. A present `null` goes through
// the field's own type, so it fails to decode unless that type is itself optional.
#[derive(Deserialize)]
struct ApiTrack {
    #[serde(default, deserialize_with = "present")]
    title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    duration: Option<u64>,
    #[serde(default, deserialize_with = "present")]
    id: Option<u64>,
    // Inner None: track has no artwork.
    #[serde(default, deserialize_with = "present")]
    artwork_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    user: Option<ApiUser>,
}

#[derive(Deserialize)]
struct ApiUser {
    #[serde(default, deserialize_with = "present")]
    username: Option<String>,
}

#[derive(Deserialize)]
struct ApiStream {
    #[serde(default, deserialize_with = "present")]
    location: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(SoundCloudError::MissingField(field))
}

/// Parse a `/resolve` response body into [`TrackDetails`].
pub fn parse_resolve_response(json: &str) -> Result<TrackDetails> {
    let track: ApiTrack = serde_json::from_str(json)?;
    let user = required(track.user, "user")?;

    Ok(TrackDetails {
        title: required(track.title, "title")?,
        length: required(track.duration, "duration")?,
        id: required(track.id, "id")?,
        art_uri: required(track.artwork_url, "artwork_url")?,
        artist: required(user.username, "user.username")?,
    })
}

/// Parse a `/tracks/{id}/stream` response body into the direct media URL.
pub fn parse_stream_response(json: &str) -> Result<String> {
    let stream: ApiStream = serde_json::from_str(json)?;
    required(stream.location, "location")
}
