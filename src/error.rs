use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid playlist: {0}")]
    InvalidInput(String),

    #[error("Spotify API error: {0}")]
    SpotifyApi(#[from] rspotify::ClientError),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Audio features unavailable for track: {0}")]
    MissingFeatures(String),

    #[error("Incomplete track data: {0}")]
    MissingData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Errors caused by what the user submitted, raised before any catalog call.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }

    /// Errors reported by, or while talking to, the catalog service.
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, AppError::SpotifyApi(_) | AppError::Catalog(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
