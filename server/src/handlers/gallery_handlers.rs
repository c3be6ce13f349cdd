use axum::Json;
use serde_json::{json, Value};

use crate::models::gallery::example_songs;

/// GET /api/gallery
pub async fn gallery() -> Json<Value> {
    Json(json!({ "songs": example_songs() }))
}
