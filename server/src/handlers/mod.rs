pub mod gallery_handlers;
pub mod health_handlers;
pub mod lyrics_handlers;
pub mod song_handlers;
