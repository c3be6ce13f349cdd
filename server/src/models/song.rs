use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Initiating,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn message(&self) -> &'static str {
        match self {
            JobStatus::Initiating => "Initializing song generation...",
            JobStatus::Processing => "Processing your song... This may take a minute...",
            JobStatus::Completed => "Your song is ready!",
            JobStatus::Failed => "Failed to generate song.",
        }
    }
}

/// A song generation job, keyed by `tracking_id` in the job map.
#[derive(Clone, Debug)]
pub struct SongJob {
    pub tracking_id: Uuid,
    pub status: JobStatus,
    pub suno_id: Option<String>,
    pub audio_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_checked: DateTime<Utc>,
    pub checks: u32,
}

impl SongJob {
    pub fn new() -> Self {
        let now = Utc::now();
        SongJob {
            tracking_id: Uuid::new_v4(),
            status: JobStatus::Initiating,
            suno_id: None,
            audio_url: None,
            created_at: now,
            last_checked: now,
            checks: 0,
        }
    }

    pub fn is_expired(&self, lifetime: Duration, now: DateTime<Utc>) -> bool {
        match chrono::Duration::from_std(lifetime) {
            Ok(lifetime) => now - self.created_at > lifetime,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_jobs_start_initiating_with_unique_ids() {
        let a = SongJob::new();
        let b = SongJob::new();
        assert_eq!(a.status, JobStatus::Initiating);
        assert_ne!(a.tracking_id, b.tracking_id);
        assert!(a.audio_url.is_none());
    }

    #[test]
    fn expiry_is_measured_from_creation() {
        let job = SongJob::new();
        let later = job.created_at + chrono::Duration::seconds(90);
        assert!(job.is_expired(Duration::from_secs(60), later));
        assert!(!job.is_expired(Duration::from_secs(120), later));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&JobStatus::Processing).unwrap(), "\"processing\"");
        assert_eq!(JobStatus::Completed.message(), "Your song is ready!");
    }
}
