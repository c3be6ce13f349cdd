use dashmap::DashMap;
use song_service_cli::{ai::LyricsWriter, suno::SunoClient, LyricsProvider, MusicProvider};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::config::Config;
use crate::models::song::SongJob;

// tracking_id → SongJob
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<DashMap<Uuid, SongJob>>,
    pub lyrics: Arc<dyn LyricsProvider>,
    pub music: Arc<dyn MusicProvider>,
    pub job_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(lyrics: Arc<dyn LyricsProvider>, music: Arc<dyn MusicProvider>) -> Self {
        AppState {
            jobs: Arc::new(DashMap::new()),
            lyrics,
            music,
            job_timeout: None,
        }
    }

    pub fn from_config(config: &Config) -> song_service_cli::Result<Self> {
        let lyrics = LyricsWriter::with_endpoint(
            config.openai_api_key.clone(),
            &config.openai_base_url,
            &config.openai_model,
        )?;
        let music = SunoClient::new(&config.suno_api_url)?;
        let mut state = AppState::new(Arc::new(lyrics), Arc::new(music));
        state.job_timeout = config.job_timeout;
        Ok(state)
    }

    pub fn job(&self, tracking_id: &Uuid) -> Option<SongJob> {
        self.jobs.get(tracking_id).map(|job| job.value().clone())
    }

    pub fn save(&self, job: SongJob) {
        self.jobs.insert(job.tracking_id, job);
    }
}
