use crate::error::{AppError, Result};
use crate::pipeline::enricher::DEFAULT_CONCURRENCY;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub bind_addr: String,
    /// Upper bound on in-flight catalog requests per analyzed playlist.
    pub max_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let spotify_client_id = std::env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| AppError::Config("SPOTIFY_CLIENT_ID not set".into()))?;

        let spotify_client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| AppError::Config("SPOTIFY_CLIENT_SECRET not set".into()))?;

        let bind_addr = std::env::var("PLAYLIST_INSIGHTS_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let max_concurrency = match std::env::var("PLAYLIST_INSIGHTS_CONCURRENCY") {
            Ok(raw) => parse_concurrency(&raw)?,
            Err(_) => DEFAULT_CONCURRENCY,
        };

        Ok(Self {
            spotify_client_id,
            spotify_client_secret,
            bind_addr,
            max_concurrency,
        })
    }

    pub fn get_missing_config(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.spotify_client_id.is_empty() {
            missing.push("SPOTIFY_CLIENT_ID".to_string());
        }
        if self.spotify_client_secret.is_empty() {
            missing.push("SPOTIFY_CLIENT_SECRET".to_string());
        }

        missing
    }

    pub fn validate_spotify_config(&self) -> bool {
        self.get_missing_config().is_empty()
    }
}

fn parse_concurrency(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(AppError::Config(format!(
            "PLAYLIST_INSIGHTS_CONCURRENCY must be a positive integer, got {:?}",
            raw
        ))),
        Ok(n) => Ok(n),
    }
}
