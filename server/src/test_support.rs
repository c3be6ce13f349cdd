use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use song_service_cli::{Clip, Error, LyricsProvider, MusicProvider, Result, SongDetails};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::state::AppState;

pub struct FakeLyrics {
    pub fail: bool,
}

#[async_trait]
impl LyricsProvider for FakeLyrics {
    async fn write_lyrics(&self, details: &SongDetails) -> Result<String> {
        if self.fail {
            Err(Error::MissingApiKey)
        } else {
            Ok(format!("A song for {} who loves {}", details.name, details.first_hobby()))
        }
    }
}

/// Stands in for the Suno wrapper. Every submit hands out `clip-N`.
#[derive(Default)]
pub struct FakeMusic {
    pub fail_submit: bool,
    pub fail_fetch: bool,
    pub prompts: Mutex<Vec<String>>,
    pub clips: Mutex<Vec<Clip>>,
}

impl FakeMusic {
    pub fn set_clip(&self, id: &str, status: &str, audio_url: Option<&str>) {
        let mut clips = self.clips.lock().unwrap();
        clips.retain(|c| c.id != id);
        clips.push(Clip {
            id: id.to_string(),
            status: status.to_string(),
            audio_url: audio_url.map(str::to_string),
            title: None,
        });
    }

    pub fn remove_clip(&self, id: &str) {
        self.clips.lock().unwrap().retain(|c| c.id != id);
    }
}

#[async_trait]
impl MusicProvider for FakeMusic {
    async fn submit(&self, prompt: &str) -> Result<String> {
        if self.fail_submit {
            return Err(Error::MalformedResponse("generate returned no clip id".into()));
        }
        let mut prompts = self.prompts.lock().unwrap();
        prompts.push(prompt.to_string());
        let id = format!("clip-{}", prompts.len());
        drop(prompts);
        self.set_clip(&id, "submitted", None);
        Ok(id)
    }

    async fn clips(&self) -> Result<Vec<Clip>> {
        if self.fail_fetch {
            return Err(Error::MalformedResponse("expected a list".into()));
        }
        Ok(self.clips.lock().unwrap().clone())
    }
}

pub fn test_state(lyrics: FakeLyrics, music: Arc<FakeMusic>) -> AppState {
    AppState::new(Arc::new(lyrics), music)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
