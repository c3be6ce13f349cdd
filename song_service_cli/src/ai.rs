use crate::{utils, Error, LyricsProvider, Result, SongDetails};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;
use std::time::Duration;
use url::Url;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub struct LyricsWriter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: Url,
    model: String,
}

impl LyricsWriter {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_endpoint(api_key, OPENAI_BASE_URL, DEFAULT_MODEL)
    }

    pub fn with_endpoint(api_key: Option<String>, base_url: &str, model: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: utils::base_url(base_url)?,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl LyricsProvider for LyricsWriter {
    async fn write_lyrics(&self, details: &SongDetails) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let payload = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": lyrics_prompt(details)
                }
            ],
            "temperature": 0.7,
            "max_tokens": 200
        });

        let response = self
            .client
            .post(self.base_url.join("v1/chat/completions")?)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                service: "openai",
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let result = response.json::<serde_json::Value>().await?;
        match result["choices"][0]["message"]["content"].as_str() {
            Some(content) if !content.trim().is_empty() => Ok(content.trim().to_string()),
            _ => Err(Error::MalformedResponse(
                "completion has no message content".into(),
            )),
        }
    }
}

pub fn lyrics_prompt(details: &SongDetails) -> String {
    format!(
        "Write a short, fun birthday song for {}.\nInclude references to: {} and {}.\nKeep it to 2-3 short verses.",
        details.name,
        details.first_hobby(),
        details.first_characteristic()
    )
}

/// Canned lyric used whenever the model can't be reached.
pub fn fallback_lyrics(details: &SongDetails) -> String {
    format!(
        "Happy Birthday dear {},\nOn this special day of yours,\nWith your love for {},\nAnd your {} ways!",
        details.name,
        details.first_hobby(),
        details.first_characteristic()
    )
}

pub async fn lyrics_or_fallback(provider: &dyn LyricsProvider, details: &SongDetails) -> String {
    match provider.write_lyrics(details).await {
        Ok(lyrics) => lyrics,
        Err(e) => {
            tracing::warn!(name = %details.name, error = %e, "lyrics generation failed, using fallback");
            fallback_lyrics(details)
        }
    }
}
