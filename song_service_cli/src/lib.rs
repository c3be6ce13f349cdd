pub mod ai;
pub mod error;
pub mod suno;
pub mod utils;

#[cfg(test)]
mod test_support;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use error::{Error, Result};
pub use suno::Clip;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Slow,
    #[default]
    Medium,
    Fast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pitch {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tempo::Slow => "slow",
            Tempo::Medium => "medium",
            Tempo::Fast => "fast",
        })
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pitch::Low => "low",
            Pitch::Medium => "medium",
            Pitch::High => "high",
        })
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        })
    }
}

pub const DEFAULT_GENRE: &str = "pop";

/// Everything the form collects about the birthday person and the song.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SongDetails {
    pub name: String,
    pub hobbies: String,
    pub characteristics: String,
    pub genre: String,
    pub tempo: Tempo,
    pub pitch: Pitch,
    pub complexity: Complexity,
}

impl SongDetails {
    pub fn new(name: &str, hobbies: &str, characteristics: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            hobbies: hobbies.trim().to_string(),
            characteristics: characteristics.trim().to_string(),
            genre: DEFAULT_GENRE.to_string(),
            tempo: Tempo::default(),
            pitch: Pitch::default(),
            complexity: Complexity::default(),
        }
    }

    pub fn first_hobby(&self) -> &str {
        first_item(&self.hobbies)
    }

    pub fn first_characteristic(&self) -> &str {
        first_item(&self.characteristics)
    }
}

/// Text before the first comma of a comma-separated list, trimmed.
pub fn first_item(list: &str) -> &str {
    list.split(',').next().unwrap_or_default().trim()
}

/// Writes lyrics for a birthday song.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    async fn write_lyrics(&self, details: &SongDetails) -> Result<String>;
}

/// Submits songs to a music-generation service and reports on them.
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// Starts a generation job and returns the service's clip id.
    async fn submit(&self, prompt: &str) -> Result<String>;

    /// Every clip the service currently knows about.
    async fn clips(&self) -> Result<Vec<Clip>>;
}
