use chrono::Utc;
use clap::Parser;
use dotenv::dotenv;
use serde_json::json;
use song_service_cli::{
    ai::{self, LyricsWriter},
    suno::{self, SongStyle, SunoClient},
    utils, Complexity, MusicProvider, Pitch, SongDetails, Tempo,
};
use std::{env, path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the birthday person
    #[arg(short, long)]
    name: String,

    /// Comma-separated hobbies
    #[arg(long)]
    hobbies: String,

    /// Comma-separated personality traits
    #[arg(short, long)]
    characteristics: String,

    #[arg(short, long, default_value = "pop")]
    genre: String,

    #[arg(short, long, value_enum, default_value_t = Tempo::Medium)]
    tempo: Tempo,

    #[arg(long, value_enum)]
    pitch: Option<Pitch>,

    #[arg(long, value_enum)]
    complexity: Option<Complexity>,

    /// Only write lyrics, don't generate audio
    #[arg(short, long)]
    skip_music: bool,

    /// Seconds between status checks
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval: u64,

    /// Give up waiting for audio after this many seconds
    #[arg(long, default_value_t = 300)]
    max_wait: u64,

    /// Where lyrics.txt and song.json are written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    // 1) Lyrics, falling back to the canned verse
    let writer = LyricsWriter::with_endpoint(
        env::var("OPENAI_API_KEY").ok(),
        &env::var("OPENAI_BASE_URL").unwrap_or_else(|_| ai::OPENAI_BASE_URL.to_string()),
        &env::var("OPENAI_MODEL").unwrap_or_else(|_| ai::DEFAULT_MODEL.to_string()),
    )?;
    let mut details = SongDetails::new(&args.name, &args.hobbies, &args.characteristics);
    details.genre = args.genre.clone();
    details.tempo = args.tempo;
    details.pitch = args.pitch.unwrap_or_default();
    details.complexity = args.complexity.unwrap_or_default();

    let lyrics = ai::lyrics_or_fallback(&writer, &details).await;
    utils::save_text(&lyrics, &args.output_dir, "lyrics.txt")?;
    println!("{}", lyrics);

    if args.skip_music {
        return Ok(());
    }

    // 2) Submit to Suno and wait for audio
    let client = SunoClient::new(
        &env::var("SUNO_API_URL").unwrap_or_else(|_| suno::SUNO_BASE_URL.to_string()),
    )?;
    let style = SongStyle {
        pitch: args.pitch,
        complexity: args.complexity,
        ..SongStyle::new(&details.genre, details.tempo)
    };
    let clip_id = client.submit(&style.prompt(&lyrics)).await?;
    tracing::info!(clip_id = %clip_id, "song submitted");

    let clip = suno::wait_for_audio(
        &client,
        &clip_id,
        Duration::from_secs(args.poll_interval),
        Duration::from_secs(args.max_wait),
    )
    .await?;

    // 3) Record the result
    let output = json!({
        "details": details,
        "lyrics": lyrics,
        "suno_id": clip.id,
        "audio_url": clip.audio_url,
        "completed_at": Utc::now(),
    });
    utils::save_json(&output, &args.output_dir, "song.json")?;
    println!("{}", clip.audio_url.unwrap_or_default());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [&str; 7] = [
        "song_service_cli",
        "--name",
        "Maya",
        "--hobbies",
        "climbing",
        "--characteristics",
        "bold",
    ];

    #[test]
    fn poll_interval_defaults_to_five_seconds() {
        let args = Args::try_parse_from(BASE).unwrap();
        assert_eq!(args.poll_interval, 5);
        assert_eq!(args.tempo, Tempo::Medium);
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let args = BASE.iter().copied().chain(["--poll-interval", "0"]);
        assert!(Args::try_parse_from(args).is_err());

        let args = BASE.iter().copied().chain(["--poll-interval", "1"]);
        assert_eq!(Args::try_parse_from(args).unwrap().poll_interval, 1);
    }
}
