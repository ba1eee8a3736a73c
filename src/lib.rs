//! Resolve public SoundCloud track URLs to metadata and fetch direct stream locations.

pub mod api;
pub mod blocking;
pub mod config;
pub mod error;
pub mod track;

pub use api::{
    get_soundcloud_music_details, parse_resolve_response, parse_stream_response, SoundCloudApi,
    SoundCloudClient,
};
pub use blocking::BlockingClient;
pub use config::ClientConfig;
pub use error::SoundCloudError;
pub use track::{SoundCloudMusic, TrackDetails, TrackPacket, TrackSummary};

#[cfg(feature = "mock")]
pub use api::MockSoundCloudApi;

pub type Result<T> = std::result::Result<T, SoundCloudError>;
