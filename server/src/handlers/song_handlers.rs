use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use song_service_cli::{
    suno::{find_clip, ClipState, SongStyle},
    Error, MusicProvider, Tempo, DEFAULT_GENRE,
};

use crate::models::song::{JobStatus, SongJob};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct InitiateSongPayload {
    pub lyrics: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub tempo: Tempo,
}

#[derive(Serialize)]
pub struct JobCreated {
    pub tracking_id: Uuid,
    pub status: JobStatus,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: JobStatus,
    pub audio_url: Option<String>,
    pub message: &'static str,
}

/// Records a new job and submits the song. The job ends up `processing`
/// on success and `failed` otherwise.
pub async fn start_song(state: &AppState, lyrics: &str, style: &SongStyle) -> Result<Uuid, Error> {
    // 1) Record the job before talking to Suno
    let mut job = SongJob::new();
    let tracking_id = job.tracking_id;
    state.save(job.clone());

    // 2) One submit, no retry
    match state.music.submit(&style.prompt(lyrics)).await {
        Ok(suno_id) => {
            tracing::info!(%tracking_id, %suno_id, "song generation started");
            job.suno_id = Some(suno_id);
            job.status = JobStatus::Processing;
            state.save(job);
            Ok(tracking_id)
        }
        Err(e) => {
            tracing::error!(%tracking_id, error = %e, "song generation could not be started");
            job.status = JobStatus::Failed;
            state.save(job);
            Err(e)
        }
    }
}

/// POST /api/initiate-song
pub async fn initiate_song(
    State(state): State<AppState>,
    Json(payload): Json<InitiateSongPayload>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let lyrics = match payload.lyrics {
        Some(l) if !l.trim().is_empty() => l,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No lyrics provided" })),
            ))
        }
    };
    let genre = payload
        .genre
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GENRE.to_string());

    let style = SongStyle::new(&genre, payload.tempo);
    let tracking_id = start_song(&state, &lyrics, &style).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Failed to initiate song generation: {}", e) })),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(JobCreated {
            tracking_id,
            status: JobStatus::Processing,
        }),
    ))
}

/// Brings a processing job up to date with one look at the remote clip list.
async fn refresh(state: &AppState, mut job: SongJob) -> SongJob {
    let now = Utc::now();

    if let Some(lifetime) = state.job_timeout {
        if job.is_expired(lifetime, now) {
            tracing::warn!(tracking_id = %job.tracking_id, "song job exceeded its lifetime");
            job.status = JobStatus::Failed;
            job.last_checked = now;
            return job;
        }
    }

    if let Some(suno_id) = job.suno_id.clone() {
        match find_clip(state.music.as_ref(), &suno_id).await {
            Ok(clip) => match clip.state() {
                ClipState::Completed(audio_url) => {
                    tracing::info!(tracking_id = %job.tracking_id, %audio_url, "song completed");
                    job.status = JobStatus::Completed;
                    job.audio_url = Some(audio_url);
                }
                ClipState::Failed => {
                    tracing::warn!(tracking_id = %job.tracking_id, %suno_id, "song generation failed");
                    job.status = JobStatus::Failed;
                }
                ClipState::Processing => {
                    tracing::debug!(tracking_id = %job.tracking_id, checks = job.checks + 1, status = %clip.status, "song still processing");
                }
            },
            Err(Error::ClipNotFound(_)) => {
                tracing::debug!(%suno_id, "clip not listed yet");
            }
            Err(e) => {
                tracing::warn!(tracking_id = %job.tracking_id, error = %e, "error checking song status");
            }
        }
    }

    job.last_checked = now;
    job.checks += 1;
    job
}

/// GET /api/check-status/{tracking_id}
pub async fn check_status(
    State(state): State<AppState>,
    Path(tracking_id): Path<String>,
) -> Result<Json<StatusResponse>, (StatusCode, Json<Value>)> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": JobStatus::Failed, "message": "Song not found" })),
        )
    };

    let tracking_id = Uuid::parse_str(&tracking_id).map_err(|_| not_found())?;
    let mut job = state.job(&tracking_id).ok_or_else(not_found)?;

    if job.status == JobStatus::Processing {
        job = refresh(&state, job).await;
        state.save(job.clone());
    }

    Ok(Json(StatusResponse {
        status: job.status,
        audio_url: job.audio_url,
        message: job.status.message(),
    }))
}
