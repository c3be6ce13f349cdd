use crate::{utils, Complexity, Error, MusicProvider, Pitch, Result, Tempo};
use async_trait::async_trait;
use backoff::{future::retry, ExponentialBackoffBuilder};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

pub const SUNO_BASE_URL: &str = "https://suno-api-livid-theta.vercel.app";
pub const SUNO_MODEL: &str = "chirp-v3-5|chirp-v3-0";

/// One generated track as listed by the Suno wrapper.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Clip {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipState {
    Processing,
    Completed(String),
    Failed,
}

impl Clip {
    /// Reads one list entry leniently. Entries without a string `id` are
    /// not clips; a missing or non-string `status` reads as "unknown".
    pub fn from_value(entry: &Value) -> Option<Clip> {
        let id = entry.get("id")?.as_str()?.to_string();
        let text = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Clip {
            id,
            status: text("status").unwrap_or_else(|| "unknown".to_string()),
            audio_url: text("audio_url"),
            title: text("title"),
        })
    }

    pub fn state(&self) -> ClipState {
        match self.status.as_str() {
            "completed" | "complete" => match self.audio_url.as_deref() {
                Some(url) if !url.is_empty() => ClipState::Completed(url.to_string()),
                _ => ClipState::Processing,
            },
            "failed" | "error" => ClipState::Failed,
            _ => ClipState::Processing,
        }
    }
}

/// Musical direction sent alongside the lyrics.
#[derive(Debug, Clone)]
pub struct SongStyle {
    pub genre: String,
    pub tempo: Tempo,
    pub pitch: Option<Pitch>,
    pub complexity: Option<Complexity>,
}

impl SongStyle {
    pub fn new(genre: &str, tempo: Tempo) -> Self {
        Self {
            genre: genre.to_string(),
            tempo,
            pitch: None,
            complexity: None,
        }
    }

    pub fn prompt(&self, lyrics: &str) -> String {
        let mut prompt = format!(
            "Create a birthday song that resembles {} and has {} tempo.",
            self.genre, self.tempo
        );
        if let Some(pitch) = self.pitch {
            prompt.push_str(&format!(" Sing it in a {} pitch.", pitch));
        }
        if let Some(complexity) = self.complexity {
            prompt.push_str(&format!(" Keep the arrangement {}.", complexity));
        }
        prompt.push_str("\nUse these lyrics:\n");
        prompt.push_str(lyrics);
        prompt
    }
}

pub struct SunoClient {
    client: Client,
    base_url: Url,
}

impl SunoClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()?,
            base_url: utils::base_url(base_url)?,
        })
    }

    async fn read_clips(&self, response: reqwest::Response) -> Result<Vec<Clip>> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: "suno",
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        let entries: Vec<Value> =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))?;
        Ok(entries.iter().filter_map(Clip::from_value).collect())
    }
}

#[async_trait]
impl MusicProvider for SunoClient {
    async fn submit(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "prompt": prompt,
            "make_instrumental": false,
            "model": SUNO_MODEL,
            "wait_audio": false
        });

        let response = self
            .client
            .post(self.base_url.join("api/generate")?)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let clips = self.read_clips(response).await?;
        match clips.into_iter().next() {
            Some(clip) if !clip.id.is_empty() => Ok(clip.id),
            _ => Err(Error::MalformedResponse(
                "generate returned no clip id".into(),
            )),
        }
    }

    async fn clips(&self) -> Result<Vec<Clip>> {
        let response = self
            .client
            .get(self.base_url.join("api/get")?)
            .header("accept", "application/json")
            .send()
            .await?;
        self.read_clips(response).await
    }
}

pub async fn find_clip(music: &dyn MusicProvider, clip_id: &str) -> Result<Clip> {
    music
        .clips()
        .await?
        .into_iter()
        .find(|c| c.id == clip_id)
        .ok_or_else(|| Error::ClipNotFound(clip_id.to_string()))
}

/// Polls every `interval` until the clip has audio, fails, or `max_wait` runs out.
pub async fn wait_for_audio(
    music: &dyn MusicProvider,
    clip_id: &str,
    interval: Duration,
    max_wait: Duration,
) -> Result<Clip> {
    let backoff = ExponentialBackoffBuilder::new()
        .with_initial_interval(interval)
        .with_max_interval(interval)
        .with_multiplier(1.0)
        .with_randomization_factor(0.0)
        .with_max_elapsed_time(Some(max_wait))
        .build();

    let outcome = retry(backoff, move || async move {
        let clip = match find_clip(music, clip_id).await {
            Ok(clip) => clip,
            Err(e) => {
                tracing::warn!(clip_id, error = %e, "status check failed");
                return Err(backoff::Error::transient(e));
            }
        };
        match clip.state() {
            ClipState::Completed(_) => Ok(clip),
            ClipState::Failed => Err(backoff::Error::permanent(Error::GenerationFailed(
                clip_id.to_string(),
            ))),
            ClipState::Processing => {
                tracing::info!(clip_id, status = %clip.status, "song still processing");
                Err(backoff::Error::transient(Error::StillProcessing(
                    clip_id.to_string(),
                )))
            }
        }
    })
    .await;

    outcome.map_err(|e| match e {
        Error::StillProcessing(id) => Error::Timeout(id),
        other => other,
    })
}
