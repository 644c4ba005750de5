#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use playlist_insights::{
    AppError, ArtistProfile, ArtistRef, Catalog, CatalogTrack, RawFeatures, Result,
};

pub const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

/// In-memory catalog serving a fixed playlist.
#[derive(Default)]
pub struct FixtureCatalog {
    pub tracks: Vec<CatalogTrack>,
    pub artists: HashMap<String, ArtistProfile>,
    pub features: HashMap<String, RawFeatures>,
    pub fail_playlist: bool,
    pub artist_lookups: AtomicUsize,
    pub feature_lookups: AtomicUsize,
}

pub fn features(danceability: f64, energy: f64, mode: i32) -> RawFeatures {
    RawFeatures {
        danceability,
        energy,
        key: 7,
        loudness: -5.0 - danceability,
        speechiness: 0.04,
        mode,
        acousticness: 0.3,
        instrumentalness: 0.01,
        liveness: 0.12,
        valence: energy / 2.0,
        tempo: 118.0,
    }
}

pub fn track(id: &str, name: &str, artist_id: &str, artist_name: &str, release_date: &str) -> CatalogTrack {
    CatalogTrack {
        id: id.to_string(),
        name: name.to_string(),
        album: format!("{} (Deluxe)", name),
        release_date: Some(release_date.to_string()),
        popularity: 60,
        duration_ms: 210_000,
        artists: vec![ArtistRef {
            id: Some(artist_id.to_string()),
            name: artist_name.to_string(),
        }],
        album_images: vec![format!("https://i.scdn.co/image/{}", id)],
    }
}

impl FixtureCatalog {
    /// Three tracks, two of them by the same artist.
    pub fn three_tracks() -> Self {
        let mut catalog = Self::default();

        catalog.add_artist("a-pop", "Lumen", &["pop", "rap"], 5_000);
        catalog.add_artist("a-jazz", "Blue Hour", &["jazz", "smooth jazz"], 800);

        catalog.add_track(track("t1", "Neon Nights", "a-pop", "Lumen", "2020-05-01"), features(0.8, 0.7, 1));
        catalog.add_track(track("t2", "Late Set", "a-jazz", "Blue Hour", "1999"), features(0.4, 0.3, 0));
        catalog.add_track(track("t3", "Afterglow", "a-pop", "Lumen", "not-a-date"), features(0.6, 0.9, 1));

        catalog
    }

    pub fn add_artist(&mut self, id: &str, name: &str, genres: &[&str], followers: u64) {
        self.artists.insert(
            id.to_string(),
            ArtistProfile {
                id: id.to_string(),
                name: name.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                followers,
            },
        );
    }

    pub fn add_track(&mut self, track: CatalogTrack, raw: RawFeatures) {
        self.features.insert(track.id.clone(), raw);
        self.tracks.push(track);
    }
}

#[async_trait]
impl Catalog for FixtureCatalog {
    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<CatalogTrack>> {
        if self.fail_playlist {
            return Err(AppError::Catalog(format!("playlist {} unavailable", playlist_id)));
        }
        Ok(self.tracks.clone())
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        self.artist_lookups.fetch_add(1, Ordering::SeqCst);
        self.artists
            .get(artist_id)
            .cloned()
            .ok_or_else(|| AppError::Catalog(format!("unknown artist {}", artist_id)))
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<RawFeatures>> {
        self.feature_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.features.get(track_id).copied())
    }
}
