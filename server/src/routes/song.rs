use axum::routing::get;
use axum::{routing::post, Router};

use crate::handlers::gallery_handlers::gallery;
use crate::handlers::lyrics_handlers::generate_lyrics;
use crate::handlers::song_handlers::{check_status, initiate_song};
use crate::state::AppState;

pub fn song_routes(state: AppState) -> Router {
    Router::new()
        .route("/generate-lyrics", post(generate_lyrics))
        .route("/initiate-song", post(initiate_song))
        .route("/check-status/{tracking_id}", get(check_status))
        .route("/gallery", get(gallery))
        .with_state(state)
}
