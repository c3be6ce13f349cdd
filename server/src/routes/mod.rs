pub mod song;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handlers::health, lyrics_handlers::generate_song};
use crate::state::AppState;
use song::song_routes;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate_song))
        .with_state(state.clone())
        .route("/health", get(health))
        .nest("/api", song_routes(state))
        .layer(TraceLayer::new_for_http())
}
