//! Track metadata and the playable track record.

use crate::api::SoundCloudApi;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Metadata returned by resolving a public track URL.
///
/// Serializes to exactly the keys `title`, `length`, `id`, `art_uri`, `artist`.
///
/// # Examples
///
/// ```rust
/// use soundcloud_track::TrackDetails;
///
/// let details = TrackDetails {
///     title: "Flickermood".to_string(),
///     length: 225_000,
///     id: 293,
///     art_uri: None,
///     artist: "Forss".to_string(),
/// };
///
/// let json = serde_json::to_value(&details).unwrap();
/// assert_eq!(json["length"], 225_000);
/// assert!(json["art_uri"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDetails {
    /// Track title
    pub title: String,
    /// Duration in milliseconds
    pub length: u64,
    /// Platform track id
    pub id: u64,
    /// Artwork URL, absent for tracks without artwork
    pub art_uri: Option<String>,
    /// Uploader's username
    pub artist: String,
}

/// Raw fields used to build a [`SoundCloudMusic`] record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPacket {
    pub video_url: String,
    pub video_title: String,
    pub video_length: u64,
    pub video_id: u64,
    pub art_uri: Option<String>,
    pub artist: String,
}

impl TrackPacket {
    /// Build a packet from a resolve result and the URL it was resolved from.
    pub fn from_details(url: impl Into<String>, details: TrackDetails) -> Self {
        Self {
            video_url: url.into(),
            video_title: details.title,
            video_length: details.length,
            video_id: details.id,
            art_uri: details.art_uri,
            artist: details.artist,
        }
    }
}

/// A track ready for playback.
///
/// The record holds no network handle; [`mrl`](SoundCloudMusic::mrl) takes the API
/// client as an argument and asks it for a fresh stream location on every call.
///
/// # Examples
///
/// ```rust
/// use soundcloud_track::{SoundCloudMusic, TrackPacket};
///
/// let track = SoundCloudMusic::new(TrackPacket {
///     video_url: "https://soundcloud.com/forss/flickermood".to_string(),
///     video_title: "Flickermood".to_string(),
///     video_length: 225_000,
///     video_id: 293,
///     art_uri: None,
///     artist: "Forss".to_string(),
/// });
///
/// assert_eq!(track.id, 293);
/// assert_eq!(track.dictify().artist, "Forss");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCloudMusic {
    pub url: String,
    pub title: String,
    pub length: u64,
    pub id: u64,
    pub art_uri: Option<String>,
    pub uploader: String,
}

/// Serializable view of a [`SoundCloudMusic`] record. Carries no track id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub url: String,
    pub title: String,
    pub artist: String,
    pub length: u64,
    pub art_uri: Option<String>,
}

impl SoundCloudMusic {
    pub fn new(packet: TrackPacket) -> Self {
        Self {
            url: packet.video_url,
            title: packet.video_title,
            length: packet.video_length,
            id: packet.video_id,
            art_uri: packet.art_uri,
            uploader: packet.artist,
        }
    }

    /// Fetch the direct, time-limited media URL for this track.
    ///
    /// The id is not validated locally; an unknown id surfaces as an API error.
    pub async fn mrl<A: SoundCloudApi + ?Sized>(&self, api: &A) -> Result<String> {
        log::debug!("Fetching stream location for '{}' ({})", self.title, self.id);
        api.stream_location(self.id).await
    }

    pub fn dictify(&self) -> TrackSummary {
        TrackSummary {
            url: self.url.clone(),
            title: self.title.clone(),
            artist: self.uploader.clone(),
            length: self.length,
            art_uri: self.art_uri.clone(),
        }
    }
}

impl From<TrackPacket> for SoundCloudMusic {
    fn from(packet: TrackPacket) -> Self {
        Self::new(packet)
    }
}

impl std::fmt::Display for SoundCloudMusic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.uploader, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet() -> TrackPacket {
        TrackPacket {
            video_url: "u".to_string(),
            video_title: "t".to_string(),
            video_length: 1000,
            video_id: 42,
            art_uri: Some("a".to_string()),
            artist: "ar".to_string(),
        }
    }

    #[test]
    fn test_record_copies_packet_fields() {
        let track = SoundCloudMusic::new(packet());
        assert_eq!(
            track,
            SoundCloudMusic {
                url: "u".to_string(),
                title: "t".to_string(),
                length: 1000,
                id: 42,
                art_uri: Some("a".to_string()),
                uploader: "ar".to_string(),
            }
        );
    }

    #[test]
    fn test_dictify_omits_id() {
        let track: SoundCloudMusic = packet().into();
        let value = serde_json::to_value(track.dictify()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "url": "u",
                "title": "t",
                "artist": "ar",
                "length": 1000,
                "art_uri": "a",
            })
        );
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_packet_from_details() {
        let details = TrackDetails {
            title: "t".to_string(),
            length: 1000,
            id: 42,
            art_uri: Some("a".to_string()),
            artist: "ar".to_string(),
        };
        assert_eq!(TrackPacket::from_details("u", details), packet());
    }

    #[test]
    fn test_display() {
        let track = SoundCloudMusic::new(packet());
        assert_eq!(format!("{track}"), "ar - t");
    }
}
