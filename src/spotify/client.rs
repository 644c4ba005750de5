use async_trait::async_trait;
use rspotify::{
    model::{ArtistId, Modality, PlayableItem, PlaylistId, TrackId},
    prelude::*,
    ClientCredsSpotify, Credentials,
};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::spotify::models::{ArtistProfile, ArtistRef, CatalogTrack, RawFeatures};

const PLAYLIST_PAGE_SIZE: u32 = 100;

/// Read-only view of the music catalog needed to analyze a playlist.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All track entries of a playlist, in playlist order.
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<CatalogTrack>>;

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile>;

    /// `Ok(None)` when the catalog has no audio analysis for the track.
    async fn audio_features(&self, track_id: &str) -> Result<Option<RawFeatures>>;
}

/// Client for public Spotify data using client credentials.
/// Does not require user authentication - only app credentials.
pub struct SpotifyCatalog {
    client: ClientCredsSpotify,
}

impl SpotifyCatalog {
    pub async fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::new(&config.spotify_client_id, &config.spotify_client_secret);
        let client = ClientCredsSpotify::new(creds);

        client.request_token().await?;
        info!("Authenticated with Spotify using client credentials");

        Ok(Self { client })
    }

    /// Extract the playlist ID from whatever the user pasted.
    /// Supports formats:
    /// - https://open.spotify.com/playlist/37i9dQZF1E8NC99vGqLsaH
    /// - https://open.spotify.com/playlist/37i9dQZF1E8NC99vGqLsaH?si=...
    /// - spotify:playlist:37i9dQZF1E8NC99vGqLsaH
    /// - 37i9dQZF1E8NC99vGqLsaH
    pub fn parse_playlist_url(input: &str) -> Result<String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::InvalidInput("playlist URL is empty".into()));
        }

        let candidate = if let Some(id) = input.strip_prefix("spotify:playlist:") {
            id.to_string()
        } else if let Ok(url) = Url::parse(input) {
            url.path_segments()
                .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
                .unwrap_or_default()
                .to_string()
        } else {
            input
                .rsplit('/')
                .next()
                .and_then(|segment| segment.split('?').next())
                .unwrap_or_default()
                .to_string()
        };

        if candidate.is_empty() || !candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::InvalidInput(format!(
                "could not find a playlist ID in {:?}",
                input
            )));
        }

        Ok(candidate)
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<CatalogTrack>> {
        let id = PlaylistId::from_id(playlist_id)
            .map_err(|e| AppError::InvalidInput(format!("Invalid playlist ID: {}", e)))?;

        let mut tracks = Vec::new();
        let mut offset = 0;

        loop {
            let page = self
                .client
                .playlist_items_manual(id.clone_static(), None, None, Some(PLAYLIST_PAGE_SIZE), Some(offset))
                .await?;

            for item in &page.items {
                let Some(PlayableItem::Track(track)) = &item.track else {
                    debug!("Skipping non-track playlist item");
                    continue;
                };

                // Local files have no catalog ID, so nothing can be looked up
                let Some(track_id) = &track.id else {
                    debug!("Skipping local track: {}", track.name);
                    continue;
                };

                tracks.push(CatalogTrack {
                    id: track_id.id().to_string(),
                    name: track.name.clone(),
                    album: track.album.name.clone(),
                    release_date: track.album.release_date.clone(),
                    popularity: track.popularity,
                    duration_ms: track.duration.num_milliseconds().max(0) as u64,
                    artists: track
                        .artists
                        .iter()
                        .map(|a| ArtistRef {
                            id: a.id.as_ref().map(|id| id.id().to_string()),
                            name: a.name.clone(),
                        })
                        .collect(),
                    album_images: track.album.images.iter().map(|i| i.url.clone()).collect(),
                });
            }

            if page.next.is_none() {
                break;
            }
            offset += PLAYLIST_PAGE_SIZE;
        }

        info!("Fetched {} tracks from playlist {}", tracks.len(), playlist_id);
        Ok(tracks)
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        let id = ArtistId::from_id(artist_id)
            .map_err(|e| AppError::Catalog(format!("Invalid artist ID {}: {}", artist_id, e)))?;

        let artist = self.client.artist(id).await?;
        debug!("Fetched artist {} ({} genres)", artist.name, artist.genres.len());

        Ok(ArtistProfile {
            id: artist_id.to_string(),
            name: artist.name,
            genres: artist.genres,
            followers: u64::from(artist.followers.total),
        })
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<RawFeatures>> {
        let id = TrackId::from_id(track_id)
            .map_err(|e| AppError::Catalog(format!("Invalid track ID {}: {}", track_id, e)))?;

        let features = self
            .client
            .tracks_features([id])
            .await?
            .and_then(|batch| batch.into_iter().next());

        Ok(features.map(|f| RawFeatures {
            danceability: f64::from(f.danceability),
            energy: f64::from(f.energy),
            key: f.key,
            loudness: f64::from(f.loudness),
            speechiness: f64::from(f.speechiness),
            mode: match f.mode {
                Modality::Major => 1,
                Modality::Minor => 0,
                _ => -1,
            },
            acousticness: f64::from(f.acousticness),
            instrumentalness: f64::from(f.instrumentalness),
            liveness: f64::from(f.liveness),
            valence: f64::from(f.valence),
            tempo: f64::from(f.tempo),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "37i9dQZF1E8NC99vGqLsaH";

    #[test]
    fn test_parse_open_spotify_url() {
        let url = format!("https://open.spotify.com/playlist/{}", ID);
        assert_eq!(SpotifyCatalog::parse_playlist_url(&url).unwrap(), ID);
    }

    #[test]
    fn test_parse_url_strips_query_string() {
        let url = format!("https://open.spotify.com/playlist/{}?si=abc123&pt=xyz", ID);
        assert_eq!(SpotifyCatalog::parse_playlist_url(&url).unwrap(), ID);
    }

    #[test]
    fn test_parse_url_with_trailing_slash() {
        let url = format!("https://open.spotify.com/playlist/{}/", ID);
        assert_eq!(SpotifyCatalog::parse_playlist_url(&url).unwrap(), ID);
    }

    #[test]
    fn test_parse_spotify_uri() {
        let uri = format!("spotify:playlist:{}", ID);
        assert_eq!(SpotifyCatalog::parse_playlist_url(&uri).unwrap(), ID);
    }

    #[test]
    fn test_parse_bare_id_and_schemeless_url() {
        assert_eq!(SpotifyCatalog::parse_playlist_url(ID).unwrap(), ID);
        let url = format!("open.spotify.com/playlist/{}?si=1", ID);
        assert_eq!(SpotifyCatalog::parse_playlist_url(&url).unwrap(), ID);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed_input() {
        for input in ["", "   ", "https://open.spotify.com/", "spotify:playlist:", "not a url!"] {
            let err = SpotifyCatalog::parse_playlist_url(input).unwrap_err();
            assert!(err.is_input_error(), "{:?} should be an input error", input);
        }
    }
}
