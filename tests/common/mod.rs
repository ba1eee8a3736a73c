#![allow(dead_code)]
use async_trait::async_trait;
use http_client::{Error, HttpClient, Request, Response};
use http_types::{Method, StatusCode, Url};
use soundcloud_track::{ClientConfig, SoundCloudClient};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "https://api.soundcloud.test";
pub const TEST_CLIENT_ID: &str = "test-client-id";

/// A request as seen by [`ScriptedClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub accept: Option<String>,
}

impl RecordedRequest {
    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[derive(Debug)]
enum Scripted {
    Reply {
        status: StatusCode,
        body: String,
        location: Option<String>,
    },
    Fail(String),
}

#[derive(Debug, Default)]
struct State {
    replies: VecDeque<Scripted>,
    requests: Vec<RecordedRequest>,
}

/// In-memory transport that replays queued responses and records every request.
///
/// It never follows redirects, so a scripted 302 is returned to the caller as-is.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClient {
    state: Arc<Mutex<State>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: StatusCode, body: &str) -> &Self {
        self.push(Scripted::Reply {
            status,
            body: body.to_string(),
            location: None,
        })
    }

    pub fn redirect(&self, body: &str, location: &str) -> &Self {
        self.push(Scripted::Reply {
            status: StatusCode::Found,
            body: body.to_string(),
            location: Some(location.to_string()),
        })
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(Scripted::Fail(message.to_string()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    fn push(&self, scripted: Scripted) -> &Self {
        self.state.lock().unwrap().replies.push_back(scripted);
        self
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn send(&self, req: Request) -> Result<Response, Error> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method: req.method(),
            url: req.url().clone(),
            accept: req.header("Accept").map(|v| v.last().as_str().to_string()),
        });

        match state.replies.pop_front() {
            Some(Scripted::Reply {
                status,
                body,
                location,
            }) => {
                let mut response = Response::new(status);
                response.insert_header("Content-Type", "application/json");
                if let Some(location) = location {
                    response.insert_header("Location", location.as_str());
                }
                response.set_body(body);
                Ok(response)
            }
            Some(Scripted::Fail(message)) => Err(Error::from_str(
                StatusCode::ServiceUnavailable,
                message,
            )),
            None => Err(Error::from_str(
                StatusCode::InternalServerError,
                "no scripted response left",
            )),
        }
    }
}

/// Build a client wired to a fresh [`ScriptedClient`].
pub fn scripted_soundcloud_client() -> (SoundCloudClient, ScriptedClient) {
    let transport = ScriptedClient::new();
    let client = SoundCloudClient::new(
        Box::new(transport.clone()),
        ClientConfig::new(TEST_CLIENT_ID).with_base_url(TEST_BASE_URL),
    );
    (client, transport)
}

pub const FLICKERMOOD_JSON: &str = r#"{
    "kind": "track",
    "id": 293,
    "title": "Flickermood",
    "duration": 225000,
    "artwork_url": "https://i1.sndcdn.com/artworks-000000293-large.jpg",
    "permalink_url": "https://soundcloud.com/forss/flickermood",
    "user": {"id": 183, "kind": "user", "username": "Forss"}
}"#;
