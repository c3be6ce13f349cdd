use axum::{extract::State, http::StatusCode, Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use song_service_cli::{
    ai::lyrics_or_fallback, suno::SongStyle, Complexity, Pitch, SongDetails, Tempo, DEFAULT_GENRE,
};

use super::song_handlers::start_song;
use crate::models::song::JobStatus;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LyricsPayload {
    pub name: Option<String>,
    pub hobbies: Option<String>,
    pub characteristics: Option<String>,
}

#[derive(Deserialize)]
pub struct SongForm {
    pub name: Option<String>,
    pub hobbies: Option<String>,
    pub characteristics: Option<String>,
    pub genre: Option<String>,
    pub tempo: Option<Tempo>,
    pub pitch: Option<Pitch>,
    pub complexity: Option<Complexity>,
}

#[derive(Serialize)]
pub struct GeneratedSong {
    pub name: String,
    pub genre: String,
    pub tempo: Tempo,
    pub lyrics: String,
    pub tracking_id: Option<Uuid>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_error: Option<String>,
}

fn missing_fields() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Missing required fields" })),
    )
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn required_details(
    name: Option<&str>,
    hobbies: Option<&str>,
    characteristics: Option<&str>,
) -> Option<SongDetails> {
    Some(SongDetails::new(
        present(name)?,
        present(hobbies)?,
        present(characteristics)?,
    ))
}

/// POST /api/generate-lyrics
pub async fn generate_lyrics(
    State(state): State<AppState>,
    Json(payload): Json<LyricsPayload>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let details = required_details(
        payload.name.as_deref(),
        payload.hobbies.as_deref(),
        payload.characteristics.as_deref(),
    )
    .ok_or_else(missing_fields)?;

    let lyrics = lyrics_or_fallback(state.lyrics.as_ref(), &details).await;
    Ok(Json(json!({ "lyrics": lyrics })))
}

/// POST /generate
pub async fn generate_song(
    State(state): State<AppState>,
    Form(form): Form<SongForm>,
) -> Result<Json<GeneratedSong>, (StatusCode, Json<Value>)> {
    let mut details = required_details(
        form.name.as_deref(),
        form.hobbies.as_deref(),
        form.characteristics.as_deref(),
    )
    .ok_or_else(missing_fields)?;
    details.genre = form
        .genre
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GENRE.to_string());
    details.tempo = form.tempo.unwrap_or_default();
    details.pitch = form.pitch.unwrap_or_default();
    details.complexity = form.complexity.unwrap_or_default();

    // 1) Lyrics never fail; the fallback verse stands in
    let lyrics = lyrics_or_fallback(state.lyrics.as_ref(), &details).await;

    // 2) Hand the lyrics to Suno
    let style = SongStyle {
        pitch: form.pitch,
        complexity: form.complexity,
        ..SongStyle::new(&details.genre, details.tempo)
    };
    let (tracking_id, status, song_error) = match start_song(&state, &lyrics, &style).await {
        Ok(id) => (Some(id), JobStatus::Processing, None),
        Err(e) => (None, JobStatus::Failed, Some(e.to_string())),
    };

    Ok(Json(GeneratedSong {
        name: details.name,
        genre: details.genre,
        tempo: details.tempo,
        lyrics,
        tracking_id,
        status,
        song_error,
    }))
}
