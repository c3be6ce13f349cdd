use crate::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Parses a service base URL so relative endpoint paths join under it,
/// keeping any path prefix.
pub fn base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

pub fn save_json<T: Serialize>(data: &T, dir: &Path, filename: &str) -> Result<PathBuf> {
    save_text(&serde_json::to_string_pretty(data)?, dir, filename)
}

pub fn save_text(content: &str, dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!(path = %path.display(), "file written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn base_url_keeps_path_prefix() {
        let url = base_url("http://proxy.local/suno").unwrap();
        assert_eq!(url.join("api/get").unwrap().as_str(), "http://proxy.local/suno/api/get");

        let root = base_url("https://api.openai.com").unwrap();
        assert_eq!(
            root.join("v1/chat/completions").unwrap().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn writes_into_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out").join("maya");

        let lyrics = save_text("Happy Birthday dear Maya", &dir, "lyrics.txt").unwrap();
        assert_eq!(fs::read_to_string(lyrics).unwrap(), "Happy Birthday dear Maya");

        let song = save_json(&json!({ "audio_url": "https://cdn/1.mp3" }), &dir, "song.json").unwrap();
        let back: serde_json::Value = serde_json::from_str(&fs::read_to_string(song).unwrap()).unwrap();
        assert_eq!(back["audio_url"], "https://cdn/1.mp3");
    }
}
