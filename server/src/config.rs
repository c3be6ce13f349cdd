use song_service_cli::{ai, suno};
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddr { name: &'static str, value: String },

    #[error("{name} must be a whole number of seconds: {value}")]
    InvalidSeconds { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub client_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub suno_api_url: String,
    pub job_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidAddr {
            name: "BIND_ADDR",
            value: bind.clone(),
        })?;

        let job_timeout = match var("SONG_JOB_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidSeconds {
                    name: "SONG_JOB_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            bind_addr,
            client_url: var("CLIENT_URL"),
            openai_api_key: var("OPENAI_API_KEY"),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| ai::OPENAI_BASE_URL.to_string()),
            openai_model: var("OPENAI_MODEL").unwrap_or_else(|| ai::DEFAULT_MODEL.to_string()),
            suno_api_url: var("SUNO_API_URL").unwrap_or_else(|| suno::SUNO_BASE_URL.to_string()),
            job_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.suno_api_url, suno::SUNO_BASE_URL);
        assert!(config.openai_api_key.is_none());
        assert!(config.job_timeout.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = load(&[("OPENAI_API_KEY", "  "), ("CLIENT_URL", "")]).unwrap();
        assert!(config.openai_api_key.is_none());
        assert!(config.client_url.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("SUNO_API_URL", "http://localhost:4000"),
            ("SONG_JOB_TIMEOUT_SECS", "600"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.suno_api_url, "http://localhost:4000");
        assert_eq!(config.job_timeout, Some(Duration::from_secs(600)));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            load(&[("SONG_JOB_TIMEOUT_SECS", "ten")]),
            Err(ConfigError::InvalidSeconds { .. })
        ));
    }
}
