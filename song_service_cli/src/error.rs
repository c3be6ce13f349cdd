use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing OPENAI_API_KEY")]
    MissingApiKey,

    #[error("Clip {0} not found")]
    ClipNotFound(String),

    #[error("Song generation failed for clip {0}")]
    GenerationFailed(String),

    #[error("Clip {0} still processing")]
    StillProcessing(String),

    #[error("Timed out waiting for clip {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
