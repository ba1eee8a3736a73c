//! Synchronous facade over [`SoundCloudClient`].
//!
//! Each call blocks the current thread until its single request completes. Do not
//! use these from inside an async runtime; await the [`SoundCloudApi`] methods there.

use crate::api::{SoundCloudApi, SoundCloudClient};
use crate::track::{SoundCloudMusic, TrackDetails};
use crate::Result;
use futures::executor::block_on;

#[derive(Clone, Debug)]
pub struct BlockingClient {
    inner: SoundCloudClient,
}

impl BlockingClient {
    pub fn new(inner: SoundCloudClient) -> Self {
        Self { inner }
    }

    pub fn resolve(&self, url: &str) -> Result<TrackDetails> {
        block_on(self.inner.resolve(url))
    }

    pub fn stream_location(&self, track_id: u64) -> Result<String> {
        block_on(self.inner.stream_location(track_id))
    }

    /// Blocking counterpart of [`SoundCloudMusic::mrl`].
    pub fn mrl(&self, track: &SoundCloudMusic) -> Result<String> {
        block_on(track.mrl(&self.inner))
    }

    pub fn into_inner(self) -> SoundCloudClient {
        self.inner
    }
}

impl From<SoundCloudClient> for BlockingClient {
    fn from(inner: SoundCloudClient) -> Self {
        Self::new(inner)
    }
}
